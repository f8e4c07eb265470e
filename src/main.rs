use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, bail, eyre};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use billed::application::{BillView, NewBillForm};
use billed::application::use_cases::SessionUseCase;
use billed::domain::entities::{SelectedFile, SessionUser};
use billed::domain::ports::{BillStorePort, ClientStoragePort, JWT_KEY};
use billed::infrastructure::{
    AppConfig, CliArgs, Command, FileClientStorage, HttpBillStore, MemoryClientStorage,
    StorageManager,
};
use billed::presentation::containers::FileChange;
use billed::presentation::events::{FileChangeEvent, IconEyeEvent, SubmitEvent};
use billed::presentation::{
    Bills, BillsContext, Logout, Navigator, NewBill, NewBillContext, Page, Route, Router,
};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

fn client_storage(config: &AppConfig) -> Arc<dyn ClientStoragePort> {
    if let Some(path) = config.effective_storage_path() {
        Arc::new(FileClientStorage::new(path))
    } else {
        warn!("No data directory available, session will not persist");
        Arc::new(MemoryClientStorage::new())
    }
}

async fn read_receipt(path: &Path) -> Result<SelectedFile> {
    let content = tokio::fs::read(path)
        .await
        .wrap_err_with(|| format!("failed to read receipt {}", path.display()))?;
    let mime_type = mime_guess::from_path(path).first_or_octet_stream();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(SelectedFile::new(name, mime_type.essence_str(), content))
}

fn print_bill_row(bill: &BillView) {
    let amount = bill
        .amount
        .map_or_else(|| "-".to_string(), |a| format!("{a} €"));
    println!(
        "{:<24} {:<12} {:<24} {:<20} {:>10} {}",
        bill.id.as_deref().unwrap_or("-"),
        bill.date,
        bill.expense_type,
        bill.name,
        amount,
        bill.status_label()
    );
}

#[allow(clippy::too_many_lines)]
async fn run(args: CliArgs, config: AppConfig) -> Result<()> {
    let storage = client_storage(&config);
    let session = SessionUseCase::new(storage.clone());
    let http = HttpBillStore::with_base_url(config.api_url.clone())
        .wrap_err("failed to create bill store client")?;
    let store: Arc<dyn BillStorePort> = Arc::new(http.with_client_storage(storage.clone()));
    let router = Arc::new(Router::new(Page::new()).with_store(store.clone()));

    match args.command {
        Command::Login { email, admin, jwt } => {
            let user = if admin {
                SessionUser::admin(email)
            } else {
                SessionUser::employee(email)
            };
            session.sign_in(&user)?;
            if let Some(jwt) = jwt {
                storage.set_item(JWT_KEY, &jwt)?;
            }
            router.on_navigate(Route::Bills);
            println!("Signed in as {}", user.email);
        }

        Command::Logout => {
            Logout::new(session, router.clone()).handle_click()?;
            println!("Signed out");
        }

        Command::Bills => {
            session.current_user()?;
            router.on_navigate(Route::Bills);
            for bill in &router.load_bills().await? {
                print_bill_row(bill);
            }
        }

        Command::New {
            expense_type,
            name,
            amount,
            date,
            vat,
            pct,
            commentary,
            file,
        } => {
            let user = session
                .current_user()
                .wrap_err("sign in with `billed login` first")?;
            router.on_navigate(Route::NewBill);

            let new_bill = NewBill::new(NewBillContext {
                session: user,
                store: Some(store),
                navigator: router.clone(),
                page: router.page().clone(),
            });

            if let Some(path) = file {
                let selected = read_receipt(&path).await?;
                let value = path.display().to_string();
                match new_bill.handle_change_file(FileChangeEvent::new(selected, value)) {
                    FileChange::Rejected => {
                        bail!("{} is not a JPEG or PNG image", path.display())
                    }
                    FileChange::Skipped => {}
                    FileChange::Uploading(pending) => {
                        let receipt = pending.wait().await?;
                        info!(file_url = %receipt.file_url, "Receipt uploaded");
                    }
                }
            }

            let form = NewBillForm::new()
                .expense_type(expense_type)
                .name(name)
                .amount(amount)
                .date(date)
                .vat(vat)
                .pct(pct)
                .commentary(commentary);

            let submission = new_bill.handle_submit(SubmitEvent::new(form));
            let bill = match submission.pending {
                Some(pending) => pending.wait().await?,
                None => submission.bill,
            };
            print_bill_row(&BillView::formatted(bill));
        }

        Command::Preview { id } => {
            session.current_user()?;
            let bills = Bills::new(BillsContext {
                store: Some(store),
                navigator: router.clone(),
                overlay_width: config.preview.modal_width,
            });

            let bill = bills
                .get_bills()
                .await?
                .into_iter()
                .find(|b| b.id.as_deref() == Some(id.as_str()))
                .ok_or_else(|| eyre!("no bill with id {id}"))?;
            let url = bill
                .file_url
                .ok_or_else(|| eyre!("bill {id} has no receipt"))?;

            let modal = bills.handle_click_icon_eye(&IconEyeEvent::new(url));
            println!("{}", modal.body);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();
    let mut config = StorageManager::new()?
        .load_config(args.config.as_deref())
        .wrap_err("failed to load configuration")?;
    config.merge_args(&args);

    init_logging(&config)?;

    info!(version = billed::VERSION, api_url = %config.api_url, "Starting billed");

    run(args, config).await
}
