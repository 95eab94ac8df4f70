use anyhow::Result;
use hangterm::core::words::{Difficulty, WordBank};
use hangterm::ui::app::App;

fn main() -> Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();

    // Optional difficulty on the command line skips the menu
    let difficulty = match args.get(1) {
        Some(arg) => Some(arg.parse::<Difficulty>()?),
        None => None,
    };

    let bank = WordBank::embedded()?;
    let mut app = App::new(bank, difficulty)?;

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();
    result
}

// Logs go to a file: stderr would draw over the alternate screen.
fn init_logging() {
    if let Some(path) = std::env::var_os("HANGTERM_LOG") {
        if let Ok(file) = std::fs::File::create(path) {
            let _ = tracing_subscriber::fmt()
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .try_init();
        }
    }
}
