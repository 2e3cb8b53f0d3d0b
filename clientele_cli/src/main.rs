use std::{error::Error, fs, io, path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use clientele::{
    domain::customer::{Customer, CustomerId, CustomerRepository},
    infrastructure::customer::MongoCustomerRepository,
    ClienteleConfig,
};
use tracing::{error, info, Level};

/// 顧客コレクションを操作する
#[derive(Parser)]
#[command(name = "clientele", version)]
struct Cli {
    /// 設定ファイルのパス
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 顧客を登録する
    Create {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: String,
    },
    /// JSON配列のファイルから顧客を一括登録する
    Import { file: PathBuf },
    /// すべての顧客を表示する
    List,
    /// 顧客を表示する
    Get {
        #[arg(long)]
        id: i64,
    },
    /// 顧客の名前を置き換える
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: String,
    },
    /// 顧客を削除する
    Delete {
        #[arg(long)]
        id: i64,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let loaded = match &cli.config {
        Some(path) => ClienteleConfig::load_from(path),
        None => ClienteleConfig::load(),
    };
    match loaded {
        Ok(config) => {
            tracing_subscriber::fmt()
                .with_max_level(Level::from(&config.logger.level))
                .with_writer(io::stderr)
                .init();
            match run(&config, cli.command).await {
                Ok(code) => code,
                Err(error) => {
                    error!("アプリケーションエラー: {}", error);
                    ExitCode::FAILURE
                }
            }
        }
        Err(error) => {
            tracing_subscriber::fmt().with_writer(io::stderr).init();
            error!("設定読み込みエラー: {}", error);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &ClienteleConfig, command: Command) -> Result<ExitCode, Box<dyn Error>> {
    let repo =
        MongoCustomerRepository::connect(&config.mongodb.url, &config.mongodb.database).await?;
    info!(
        "接続先: {} / {}.{}",
        config.mongodb.url,
        config.mongodb.database,
        repo.collection_name()
    );
    match command {
        Command::Create { id, name } => {
            let customer = Customer::new(CustomerId::from(id), name);
            repo.create(&customer).await?;
            println!("{}", serde_json::to_string(&customer)?);
        }
        Command::Import { file } => {
            let customers: Vec<Customer> = serde_json::from_slice(&fs::read(&file)?)?;
            repo.create_many(&customers).await?;
            info!("{}件の顧客を登録しました", customers.len());
        }
        Command::List => {
            let customers = repo.find_all().await?;
            println!("{}", serde_json::to_string_pretty(&customers)?);
        }
        Command::Get { id } => match repo.find_by_id(CustomerId::from(id)).await? {
            Some(customer) => println!("{}", serde_json::to_string_pretty(&customer)?),
            None => {
                eprintln!("customer not found: {}", id);
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Update { id, name } => {
            let id = CustomerId::from(id);
            println!("{}", repo.update(id, &Customer::new(id, name)).await?);
        }
        Command::Delete { id } => {
            println!("{}", repo.delete(CustomerId::from(id)).await?);
        }
    }
    Ok(ExitCode::SUCCESS)
}
