use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use photo_dater_core::{
    read_exif_timestamp, CanonicalName, FileStatus, PhotoRenamer, RenameOptions, RenameReport,
    TimeOffset, DEFAULT_MAX_ATTEMPTS,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "photo-dater")]
#[command(about = "写真を撮影日時 (YYYY-MM-DD_HH-MM-SS) のファイル名に一括リネームします")]
struct Cli {
    /// -v で debug, -vv で trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// warn 以上のみ表示
    #[arg(short, long, default_value_t = false, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// フォルダ以下の写真をすべてリネーム
    Rename(RenameArgs),
    /// 1ファイル分のリネーム先を表示 (変更なし)
    Show(ShowArgs),
}

#[derive(Debug, Args)]
struct OffsetArgs {
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    years: i32,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    hours: i32,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    minutes: i32,
}

impl OffsetArgs {
    fn to_offset(&self) -> TimeOffset {
        TimeOffset::new(self.years, self.hours, self.minutes)
    }
}

#[derive(Debug, Args)]
struct RenameArgs {
    input: PathBuf,
    #[command(flatten)]
    offset: OffsetArgs,
    #[arg(long, default_value_t = false)]
    dry_run: bool,
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
}

#[derive(Debug, Args)]
struct ShowArgs {
    file: PathBuf,
    #[command(flatten)]
    offset: OffsetArgs,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Rename(args) => cmd_rename(args),
        Commands::Show(args) => cmd_show(args),
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::Warn,
        (false, 0) => LevelFilter::Info,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn cmd_rename(args: RenameArgs) -> Result<()> {
    let options = RenameOptions {
        offset: args.offset.to_offset(),
        max_attempts: args.max_attempts,
        dry_run: args.dry_run,
    };
    options.validate()?;

    let mut renamer = PhotoRenamer::new(&options);
    let report = renamer
        .rename_tree(&args.input)
        .with_context(|| format!("処理を中断しました: {}", args.input.display()))?;

    match args.output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => {
            print_table(&report);
        }
    }

    if report.dry_run {
        eprintln!("dry-runモード: 実ファイルは変更していません。");
    } else {
        eprintln!(
            "適用完了: {}件 (変更なし {}件)",
            report.stats.renamed, report.stats.unchanged
        );
    }

    Ok(())
}

fn cmd_show(args: ShowArgs) -> Result<()> {
    let Some(timestamp) = read_exif_timestamp(&args.file)? else {
        println!("{}: 撮影日時がありません", args.file.display());
        return Ok(());
    };
    let corrected = args
        .offset
        .to_offset()
        .correct(&timestamp)
        .context("補正後の日時が範囲外です")?;
    let name = CanonicalName::for_file(&corrected, &args.file);
    println!(
        "{} -> {}",
        args.file.display(),
        name.file_name(0).to_string_lossy()
    );
    Ok(())
}

fn print_table(report: &RenameReport) {
    println!("元ファイル -> 新ファイル");
    for entry in &report.entries {
        match &entry.status {
            FileStatus::Renamed { target, .. } => {
                println!("{} -> {}", entry.path.display(), target.display())
            }
            FileStatus::Unchanged => println!("{} (変更なし)", entry.path.display()),
            FileStatus::NoTimestamp => println!("{} (撮影日時なし)", entry.path.display()),
            FileStatus::Unparseable { message } | FileStatus::Failed { message } => {
                println!("{} (スキップ: {})", entry.path.display(), message)
            }
        }
    }

    println!(
        "\n集計: scanned={} renamed={} unchanged={} no_timestamp={} unparseable={} failed={}",
        report.stats.scanned,
        report.stats.renamed,
        report.stats.unchanged,
        report.stats.no_timestamp,
        report.stats.unparseable,
        report.stats.failed
    );
}
