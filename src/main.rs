//! Command-line entry point: sequences detection, selection, command
//! building, and the final launch.

use clap::Parser;

use edopen::registry::{Category, EDITORS};
use edopen::select::Selection;
use edopen::{command, config, detect, launch, select, FatalError, ResolvedEditor};

#[derive(Parser)]
#[command(
    name = "edopen",
    version,
    about = "Open files in your preferred text editor, blocking until editing completes"
)]
struct Cli {
    /// Pick an editor interactively, then open the configuration file
    #[arg(short = 'c', long = "config")]
    config: bool,

    /// List known editors with their detection status
    #[arg(short = 'l', long = "list")]
    list: bool,

    /// Never append a wait flag, even for graphical editors
    #[arg(short = 'n', long = "no-wait")]
    no_wait: bool,

    /// Ask the editor to block until editing completes (already the default
    /// for graphical editors)
    #[arg(short = 'w', long = "wait")]
    wait: bool,

    /// Files to pass to the editor
    #[arg(value_name = "FILE")]
    files: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    // Checked before any detection: the guard marker being present at
    // startup means this program was configured as its own editor.
    if launch::guard_is_set() {
        fatal(&FatalError::RecursionDetected);
    }

    if cli.list {
        print_list();
        return;
    }

    if cli.config {
        run_config_mode(&cli);
        return;
    }

    run_edit_mode(&cli);
}

/// Print a final diagnostic and exit with the classified status. Fatal
/// messages are always emitted, terminal or not.
fn fatal(err: &FatalError) -> ! {
    eprintln!("edopen: {err}");
    std::process::exit(err.exit_code());
}

/// `--list`: every registry entry in fixed order with category, wait flag,
/// and whether it is currently installed. Never invokes an editor.
fn print_list() {
    let selected = config::read_selection()
        .as_deref()
        .and_then(ResolvedEditor::from_command_line);
    let selected_name = selected.as_ref().map(ResolvedEditor::short_name);

    for spec in EDITORS {
        let category = match spec.category {
            Category::Terminal => "terminal",
            Category::Graphical => "graphical",
        };
        let wait = spec.wait_flag.unwrap_or("-");
        let status = if detect::scan::installed(spec.id) { "installed" } else { "missing" };
        let marker = if selected_name == Some(spec.id) { "  (selected)" } else { "" };
        println!("{:<8} {category:<10} {wait:<8} {status}{marker}", spec.id);
    }
}

/// `--config`: pick an editor interactively, then open the configuration
/// file itself in the chosen editor.
fn run_config_mode(cli: &Cli) {
    let id = match select::select("Select your default editor:") {
        Selection::Chosen(id) => id,
        Selection::Cancelled => return,
    };

    let path = match config::primary_path() {
        Ok(path) => path.display().to_string(),
        Err(err) => fatal(&FatalError::Internal(format!("{err:#}"))),
    };

    let resolved = ResolvedEditor { executable: id.to_string(), initial_args: Vec::new() };
    let argv = command::build(&resolved, cli.no_wait, cli.wait);
    match launch::launch(argv, &[path]) {
        Ok(never) => match never {},
        Err(err) => fatal(&err),
    }
}

/// Default mode: resolve an editor, falling back to the interactive
/// selector, then build the argument vector and hand the process over.
fn run_edit_mode(cli: &Cli) {
    let resolved = detect::resolve().or_else(|| {
        eprintln!("No editor configured.");
        match select::select("Select an editor to use:") {
            Selection::Chosen(id) => {
                Some(ResolvedEditor { executable: id.to_string(), initial_args: Vec::new() })
            }
            Selection::Cancelled => None,
        }
    });

    let Some(resolved) = resolved else {
        fatal(&FatalError::NoEditorFound);
    };

    let argv = command::build(&resolved, cli.no_wait, cli.wait);
    match launch::launch(argv, &cli.files) {
        Ok(never) => match never {},
        Err(err) => fatal(&err),
    }
}
