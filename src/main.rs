use colourcode::app::App;
use colourcode::clipboard::Clipboard;
use colourcode::engine::Config;
use colourcode::repl::Shell;
use colourcode::ui::Painter;
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let config = Config::load()?;
    // Probed once; the app only ever sees the result
    let clipboard = Clipboard::detect(&config.clipboard);
    let painter = Painter::new(config.display.color);
    let mut app = App::new(config, clipboard);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), painter);
    shell.run(&mut app)?;

    Ok(())
}
