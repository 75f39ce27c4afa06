//! `palette` command line entry point.
//!
//! # Responsibility
//! - Start a dashboard session from env + flags and print read-only views.
//! - Render note content through the core formatter.

use clap::{Args, Parser, Subcommand};
use palette_core::{
    flush_logging, format_note, init_logging, Block, Dashboard, Emphasis, Project, SessionConfig,
};
use std::error::Error;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "palette", about = concat!("palette v", env!("CARGO_PKG_VERSION"), " - project dashboard core"), version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Write rolling log files to this absolute directory instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Start without the sample projects
    #[arg(long, global = true)]
    empty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List all projects
    Projects,
    /// Show a project with its todos, notes and files
    Show(ShowArgs),
    /// Format note content (stdin when no path is given)
    Format(FormatArgs),
}

#[derive(Args)]
struct ShowArgs {
    /// Project id
    id: String,
}

#[derive(Args)]
struct FormatArgs {
    /// File holding the note content
    path: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    let result = run(cli);
    flush_logging();
    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = SessionConfig::from_env();
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if let Some(dir) = cli.log_dir {
        config.logging.log_dir = Some(dir);
    }
    if cli.empty {
        config.seed_fixtures = false;
    }
    init_logging(&config.logging)?;
    log::debug!("event=cli_start module=cli status=ok");

    match cli.command {
        Commands::Projects => {
            let dashboard = Dashboard::from_config(&config)?;
            for project in dashboard.list_projects() {
                println!("{}", project_line(project));
            }
        }
        Commands::Show(args) => {
            let dashboard = Dashboard::from_config(&config)?;
            show_project(&dashboard, &args.id)?;
        }
        Commands::Format(args) => {
            let content = match args.path {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            for block in format_note(&content) {
                println!("{}", block_line(&block));
            }
        }
    }
    Ok(())
}

fn show_project(dashboard: &Dashboard, id: &str) -> Result<(), Box<dyn Error>> {
    let project = dashboard.get_project(id)?;
    println!("{}", project_line(project));
    println!("  {}", project.description);

    println!("todos:");
    for todo in dashboard.list_todos(id)? {
        let mark = if todo.completed { "x" } else { " " };
        println!("  [{}] {} {}", mark, todo.id, todo.text);
    }
    println!("notes:");
    for note in dashboard.list_notes(id)? {
        let tags = note.tags().iter().cloned().collect::<Vec<_>>().join(", ");
        println!("  {} {} ({}) [{}]", note.id, note.title, note.date, tags);
    }
    println!("files:");
    for file in dashboard.list_files(id)? {
        println!(
            "  {} {} {} {} {}",
            file.id, file.name, file.kind, file.size, file.date
        );
    }
    Ok(())
}

fn project_line(project: &Project) -> String {
    let actions = project
        .actions
        .iter()
        .map(|action| action.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "{:>3}  {:<24} {:>4}  {}",
        project.id,
        project.title,
        project.progress.to_string(),
        actions
    )
}

fn block_line(block: &Block) -> String {
    match block {
        Block::Heading { text } => format!("heading    {text}"),
        Block::ListItem { text } => format!("list-item  {text}"),
        Block::CheckItem { checked, text } => {
            let mark = if *checked { "x" } else { " " };
            format!("check [{mark}]  {text}")
        }
        Block::CodeBlock { text } => format!("code       {text}"),
        Block::Paragraph { text, style } => match style.emphasis() {
            Emphasis::Plain => format!("paragraph  {text}"),
            emphasis => format!("paragraph  ({emphasis:?}) {text}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{block_line, project_line};
    use palette_core::seed::seed_projects;
    use palette_core::{Block, InlineStyle};

    #[test]
    fn project_line_pads_id_title_and_progress() {
        let projects = seed_projects();
        assert_eq!(
            project_line(&projects[0]),
            "  1  UNIVERSITY MANAGEMENT     65%  OPEN DETAILS EDIT DELETE"
        );
        assert_eq!(
            project_line(&projects[5]),
            "  6  FILES                     15%  FILES EDIT DELETE"
        );
    }

    #[test]
    fn block_line_labels_each_block_kind() {
        let checked = Block::CheckItem {
            text: "done".to_string(),
            checked: true,
        };
        assert_eq!(block_line(&checked), "check [x]  done");

        let plain = Block::Paragraph {
            text: "plain".to_string(),
            style: InlineStyle::default(),
        };
        assert_eq!(block_line(&plain), "paragraph  plain");

        let bold = Block::Paragraph {
            text: "**loud**".to_string(),
            style: InlineStyle::detect("**loud**"),
        };
        assert_eq!(block_line(&bold), "paragraph  (Bold) **loud**");

        let code = Block::CodeBlock {
            text: "x = 1".to_string(),
        };
        assert_eq!(block_line(&code), "code       x = 1");
    }
}
