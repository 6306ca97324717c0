use clap::Parser;
use gradport::core::session::Session;
use gradport::core::store::HttpGraduateStore;
use gradport::domain::ports::{ConfigProvider, Notifier};
use gradport::utils::error::ErrorSeverity;
use gradport::utils::{logger, validation::Validate};
use gradport::{CliConfig, Command, PortalError, PortalFileConfig};
use std::time::Duration;

/// Prints transient notices the way the web portal toasts them.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        println!("✅ {}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("❌ {}", message);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting gradport CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let file_config = match &config.config {
        Some(path) => match PortalFileConfig::from_file(path) {
            Ok(file_config) => {
                if let Err(e) = file_config.validate() {
                    fail(&e);
                }
                Some(file_config)
            }
            Err(e) => fail(&e),
        },
        None => None,
    };

    let endpoint = config.resolve_endpoint(file_config.as_ref());
    tracing::debug!("Using endpoint: {}", endpoint);

    let timeout = file_config
        .as_ref()
        .and_then(|f| f.request_timeout_seconds())
        .map(Duration::from_secs);
    let headers = file_config.as_ref().and_then(|f| f.api.headers.as_ref());
    let store = match HttpGraduateStore::with_options(&endpoint, timeout, headers) {
        Ok(store) => store,
        Err(e) => fail(&e),
    };

    let retries = if config.retries > 0 {
        config.list_retries()
    } else {
        file_config.as_ref().map(|f| f.list_retries()).unwrap_or(0)
    };

    let mut session = Session::new(store, ConsoleNotifier);

    if let Err(e) = run(&mut session, &config.command, retries).await {
        tracing::error!(
            "Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        // The session has already reported the failure; add the hint only.
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(exit_code(&e));
    }

    Ok(())
}

async fn run(
    session: &mut Session<HttpGraduateStore, ConsoleNotifier>,
    command: &Command,
    retries: u32,
) -> gradport::Result<()> {
    // Every command starts from a fresh full fetch; the retry budget applies
    // only here.
    session.load_with_retries(retries).await?;

    match command {
        Command::List { search } => {
            session.set_search_term(search.as_deref().unwrap_or(""));
            let visible = session.visible();
            if visible.is_empty() {
                println!("No graduates found.");
            }
            for graduate in visible {
                print_graduate(graduate);
            }
        }
        Command::Add {
            full_name,
            email,
            university,
            degree,
            graduation_year,
            skills,
            portfolio_url,
        } => {
            session.open_new();
            {
                let draft = session.draft_mut();
                draft.full_name = full_name.clone();
                draft.email = email.clone();
                draft.university = university.clone();
                draft.degree = degree.clone();
                draft.graduation_year = *graduation_year;
                draft.portfolio_url = portfolio_url.clone();
            }
            for skill in skills {
                session.set_skill_input(skill);
                session.commit_skill_input();
            }
            let id = session.submit().await?;
            println!("Created graduate {}", id);
        }
        Command::Update {
            id,
            full_name,
            email,
            university,
            degree,
            graduation_year,
            add_skills,
            remove_skills,
            portfolio_url,
        } => {
            session.open_edit(*id)?;
            {
                let draft = session.draft_mut();
                if let Some(full_name) = full_name {
                    draft.full_name = full_name.clone();
                }
                if let Some(email) = email {
                    draft.email = email.clone();
                }
                if let Some(university) = university {
                    draft.university = university.clone();
                }
                if let Some(degree) = degree {
                    draft.degree = degree.clone();
                }
                if let Some(graduation_year) = graduation_year {
                    draft.graduation_year = *graduation_year;
                }
                if let Some(portfolio_url) = portfolio_url {
                    draft.portfolio_url = Some(portfolio_url.clone());
                }
            }
            for skill in remove_skills {
                session.remove_skill(skill);
            }
            for skill in add_skills {
                session.set_skill_input(skill);
                session.commit_skill_input();
            }
            session.submit().await?;
        }
        Command::Delete { id } => {
            session.delete(*id).await?;
        }
    }

    Ok(())
}

fn print_graduate(graduate: &gradport::Graduate) {
    println!(
        "#{} {} ({})",
        graduate.id, graduate.full_name, graduate.graduation_year
    );
    println!("   {}, {}", graduate.degree, graduate.university);
    println!("   📧 {}", graduate.email);
    println!("   🛠 {}", graduate.skills.join(", "));
    if let Some(url) = &graduate.portfolio_url {
        println!("   🔗 {}", url);
    }
}

fn exit_code(e: &PortalError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 2,    // user input problem
        ErrorSeverity::Medium => 1, // transient / remote failure
        ErrorSeverity::High => 3,   // config or internal problem
    }
}

fn fail(e: &PortalError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(e));
}
