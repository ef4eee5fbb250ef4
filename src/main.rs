use cashtill::application::register::Register;
use cashtill::config::{DEFAULT_TRANSACTIONS, RegisterConfig, SimulationConfig};
use cashtill::domain::bills::Bills;
use cashtill::domain::transaction::Purchase;
use cashtill::error::TillError;
use cashtill::infrastructure::in_memory::InMemoryJournal;
use cashtill::interfaces::csv::journal_writer::JournalWriter;
use cashtill::interfaces::csv::purchase_reader::PurchaseReader;
use cashtill::interfaces::simulation::PurchaseGenerator;
use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

type PurchaseResult = cashtill::error::Result<Purchase>;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Purchases CSV file (cost, twenties, tens, fives, ones). Generated if omitted.
    input: Option<PathBuf>,

    /// $1 bills loaded into the till at opening
    #[arg(long, env = "CASHTILL_ONES", default_value_t = 50)]
    ones: u32,

    /// $5 bills loaded into the till at opening
    #[arg(long, env = "CASHTILL_FIVES", default_value_t = 20)]
    fives: u32,

    /// $10 bills loaded into the till at opening
    #[arg(long, env = "CASHTILL_TENS", default_value_t = 10)]
    tens: u32,

    /// $20 bills loaded into the till at opening
    #[arg(long, env = "CASHTILL_TWENTIES", default_value_t = 5)]
    twenties: u32,

    /// Number of random purchases to generate
    #[arg(long, env = "CASHTILL_TRANSACTIONS", default_value_t = DEFAULT_TRANSACTIONS)]
    transactions: usize,

    /// Seed for generated purchases
    #[arg(long, env = "CASHTILL_SEED")]
    seed: Option<u64>,

    /// Replay the fixed test purchase sequence
    #[arg(long)]
    test_data: bool,

    /// Output format for the transaction journal
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
}

impl Cli {
    fn register_config(&self) -> RegisterConfig {
        RegisterConfig {
            starting_cash: Bills {
                twenties: self.twenties,
                tens: self.tens,
                fives: self.fives,
                ones: self.ones,
            },
        }
    }

    fn simulation_config(&self) -> SimulationConfig {
        SimulationConfig {
            transactions: self.transactions,
            seed: self.seed,
            test_data: self.test_data,
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "cashtill=warn".into()),
        )
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let journal = Box::new(InMemoryJournal::new());
    let mut register = Register::open(&cli.register_config(), journal).into_diagnostic()?;

    eprintln!("{}", register.summary());
    eprintln!("Expected till value: {}\n", register.expected_total());

    let purchases: Box<dyn Iterator<Item = PurchaseResult>> = match &cli.input {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            Box::new(PurchaseReader::new(file).purchases())
        }
        None => Box::new(PurchaseGenerator::from_config(&cli.simulation_config()).map(Ok)),
    };

    for purchase in purchases {
        match purchase {
            Ok(purchase) => match register.process(purchase).await {
                Ok(record) => {
                    if let Some(detail) = &record.detail {
                        eprintln!("Could not make transaction: {detail}");
                    }
                }
                Err(e @ TillError::BalanceMismatch { .. }) => return Err(e).into_diagnostic(),
                Err(e) => eprintln!("Error processing purchase: {e}"),
            },
            Err(e) => {
                eprintln!("Error reading purchase: {e}");
            }
        }

        if register.is_closed() {
            break;
        }
    }

    eprintln!("{}", register.summary());
    eprintln!("Expected till value: {}", register.expected_total());

    let report = register.close().await.into_diagnostic()?;

    let stdout = io::stdout();
    match cli.format {
        OutputFormat::Csv => {
            let mut writer = JournalWriter::new(stdout.lock());
            writer.write_records(&report.records).into_diagnostic()?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(stdout.lock(), &report).into_diagnostic()?;
        }
    }

    Ok(())
}
