use std::sync::Arc;

use async_trait::async_trait;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod editors;
mod shell;
mod tables;
mod terminal;

use auth_cell::{Access, AuthService, NavItem, SessionGuard};
use shared_config::ApiConfig;
use shared_http::ApiClient;
use shared_models::auth::LoginRequest;
use shared_models::session::{MemorySessionStore, SessionStore};
use shared_screens::{ListScreen, ReferenceSource, ScreenContext};

use dentist_cell::DentistService;
use patient_cell::PatientService;
use user_cell::{PasswordChangeDraft, UserAccount, UserService};

use editors::*;
use shell::{browse, ExportSpec, ExtraActions, NoExtras, ScreenConfig};
use terminal::Terminal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Navident admin console");

    let config = ApiConfig::from_env();
    let terminal = Arc::new(Terminal::new(&config.download_dir));
    let session: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());

    let api = ApiClient::new(&config, session.clone(), terminal.clone())?;
    let ctx = ScreenContext::new(terminal.clone(), terminal.clone(), terminal.clone());

    let auth = AuthService::new(api.clone());
    let guard = SessionGuard::new(session.clone());

    loop {
        match guard.check() {
            Access::RedirectToLogin => {
                if !login(&auth, &terminal).await {
                    return Ok(());
                }
            }
            Access::Granted(current) => {
                let items = auth_cell::nav_items(current.role);
                match menu(&terminal, &items) {
                    MenuChoice::Screen(path) => run_screen(path, &api, &ctx, &terminal).await,
                    MenuChoice::Logout => auth.logout(),
                    MenuChoice::Quit => return Ok(()),
                }
            }
        }
    }
}

async fn login(auth: &AuthService, terminal: &Arc<Terminal>) -> bool {
    loop {
        terminal.say("Sign in (blank username to quit)");
        let username = terminal.read_line("  username: ");
        if username.is_empty() {
            return false;
        }
        let password = terminal.read_line("  password: ");

        match auth.signin(LoginRequest { username, password }).await {
            Ok(response) => {
                terminal.say(&format!(
                    "Welcome {} ({})",
                    response.username,
                    response.role.label()
                ));
                return true;
            }
            Err(e) => {
                tracing::warn!(error = %e, "login failed");
                terminal.say("Login failed - check your credentials");
            }
        }
    }
}

enum MenuChoice {
    Screen(&'static str),
    Logout,
    Quit,
}

fn menu(terminal: &Arc<Terminal>, items: &[NavItem]) -> MenuChoice {
    loop {
        println!();
        for (i, item) in items.iter().enumerate() {
            println!("  {}. {}", i + 1, item.text);
        }
        println!("  l. Logout");
        println!("  q. Quit");

        let input = terminal.read_line("> ");
        match input.as_str() {
            "l" => return MenuChoice::Logout,
            "q" => return MenuChoice::Quit,
            other => {
                let picked = other
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|n| items.get(n));
                if let Some(item) = picked {
                    return MenuChoice::Screen(item.path);
                }
            }
        }
    }
}

async fn run_screen(
    path: &str,
    api: &ApiClient,
    ctx: &ScreenContext,
    terminal: &Arc<Terminal>,
) {
    let patients: Arc<dyn ReferenceSource> =
        Arc::new(PatientService::new(api.clone()).reference_options());
    let dentists: Arc<dyn ReferenceSource> =
        Arc::new(DentistService::new(api.clone()).reference_options());

    match path {
        "/patients" => {
            let service = PatientService::new(api.clone());
            let mut screen = service.screen(ctx.clone());
            let editor = PatientEditor {
                terminal: terminal.clone(),
            };
            let config = ScreenConfig {
                export: ExportSpec::Simple {
                    path: "/patients/export/excel",
                    filename: "patients.xlsx",
                },
                has_pdf: true,
            };
            browse(&mut screen, &editor, &NoExtras, &config, terminal).await;
        }
        "/dentists" => {
            let service = DentistService::new(api.clone());
            let mut screen = service.screen(ctx.clone());
            let editor = DentistEditor {
                terminal: terminal.clone(),
            };
            let config = ScreenConfig {
                export: ExportSpec::Simple {
                    path: "/dentists/export/excel",
                    filename: "dentists.xlsx",
                },
                has_pdf: true,
            };
            browse(&mut screen, &editor, &NoExtras, &config, terminal).await;
        }
        "/appointments" => {
            let service = appointment_cell::AppointmentService::new(api.clone());
            let mut screen = service.screen(ctx.clone());
            let editor = AppointmentEditor {
                terminal: terminal.clone(),
                patients,
                dentists,
            };
            let config = ScreenConfig {
                export: ExportSpec::DateRange {
                    path: "/appointments/export/excel",
                    start_param: "startDate",
                    end_param: "endDate",
                    filename: "appointments.xlsx",
                },
                has_pdf: false,
            };
            browse(&mut screen, &editor, &NoExtras, &config, terminal).await;
        }
        "/bills" => {
            let service = bill_cell::BillService::new(api.clone());
            let mut screen = service.screen(ctx.clone());
            let editor = BillEditor {
                terminal: terminal.clone(),
                patients,
                dentists,
            };
            let config = ScreenConfig {
                export: ExportSpec::PerPatient {
                    prefix: "/bills/patient/",
                    suffix: "/export/excel",
                    filename_prefix: "bills",
                },
                has_pdf: true,
            };
            browse(&mut screen, &editor, &NoExtras, &config, terminal).await;
        }
        "/treatments" => {
            let service = treatment_cell::TreatmentService::new(api.clone());
            let mut screen = service.screen(ctx.clone());
            let editor = TreatmentEditor {
                terminal: terminal.clone(),
            };
            let config = ScreenConfig {
                export: ExportSpec::None,
                has_pdf: false,
            };
            browse(&mut screen, &editor, &NoExtras, &config, terminal).await;
        }
        "/prescriptions" => {
            let service = prescription_cell::PrescriptionService::new(api.clone());
            let mut screen = service.screen(ctx.clone());
            let editor = PrescriptionEditor {
                terminal: terminal.clone(),
                patients,
                dentists,
            };
            let config = ScreenConfig {
                export: ExportSpec::DateRange {
                    path: "/prescriptions/export/excel",
                    start_param: "start",
                    end_param: "end",
                    filename: "prescriptions.xlsx",
                },
                has_pdf: true,
            };
            browse(&mut screen, &editor, &NoExtras, &config, terminal).await;
        }
        "/finance" => {
            let service = finance_cell::FinanceService::new(api.clone());
            let mut screen = service.screen(ctx.clone());
            let editor = FinanceEditor {
                terminal: terminal.clone(),
            };
            let config = ScreenConfig {
                export: ExportSpec::DateRange {
                    path: "/finance/export/excel",
                    start_param: "start",
                    end_param: "end",
                    filename: "finance.xlsx",
                },
                has_pdf: false,
            };
            browse(&mut screen, &editor, &NoExtras, &config, terminal).await;
        }
        "/insurance" => {
            let service = insurance_cell::InsuranceService::new(api.clone());
            let mut screen = service.screen(ctx.clone());
            let editor = InsuranceEditor {
                terminal: terminal.clone(),
                patients,
            };
            let config = ScreenConfig {
                export: ExportSpec::PerPatient {
                    prefix: "/insurance/patient/",
                    suffix: "/export/excel",
                    filename_prefix: "insurance",
                },
                has_pdf: false,
            };
            browse(&mut screen, &editor, &NoExtras, &config, terminal).await;
        }
        "/users" => {
            let service = UserService::new(api.clone());
            let mut screen = service.screen(ctx.clone());
            let editor = UserEditor {
                terminal: terminal.clone(),
            };
            let extras = UserExtras {
                service: UserService::new(api.clone()),
                terminal: terminal.clone(),
            };
            let config = ScreenConfig {
                export: ExportSpec::None,
                has_pdf: false,
            };
            browse(&mut screen, &editor, &extras, &config, terminal).await;
        }
        _ => {}
    }
}

/// Change-password and toggle-active, reachable only from the user screen.
struct UserExtras {
    service: UserService,
    terminal: Arc<Terminal>,
}

#[async_trait]
impl ExtraActions<UserAccount> for UserExtras {
    fn menu_hint(&self) -> &'static str {
        " [w]password# [t]oggle#"
    }

    async fn handle(
        &self,
        command: &str,
        id: Option<String>,
        screen: &mut ListScreen<UserAccount>,
    ) -> bool {
        match command {
            "w" => {
                let Some(id) = id else {
                    self.terminal.say("  no such row");
                    return true;
                };
                let draft = PasswordChangeDraft {
                    new_password: self.terminal.read_line("  new password: "),
                    confirm_password: self.terminal.read_line("  confirm password: "),
                };
                match draft.submit() {
                    Ok(payload) => match self.service.change_password(&id, &payload).await {
                        Ok(()) => self.terminal.say("[ok] Password changed successfully"),
                        Err(e) => {
                            tracing::warn!(error = %e, "password change failed");
                            self.terminal.say("[error] Failed to change password");
                        }
                    },
                    Err(failures) => {
                        for (field, message) in failures {
                            self.terminal.say(&format!("  ! {}: {}", field, message));
                        }
                    }
                }
                true
            }
            "t" => {
                let Some(id) = id else {
                    self.terminal.say("  no such row");
                    return true;
                };
                match self.service.toggle_active(&id).await {
                    Ok(user) => {
                        self.terminal.say(&format!(
                            "[ok] {} is now {}",
                            user.username,
                            if user.active { "active" } else { "inactive" }
                        ));
                        screen.refresh().await;
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "toggle active failed");
                        self.terminal.say("[error] Failed to update user");
                    }
                }
                true
            }
            _ => false,
        }
    }
}
