use xfercalc::app::App;
use xfercalc::Result;

fn main() -> Result<()> {
    // Line-based fallback for terminals where the TUI cannot run
    if std::env::args().skip(1).any(|a| a == "--plain" || a == "-p") {
        return xfercalc::simple::run();
    }

    let mut app = App::new()?;
    app.init()?;
    app.run()
}
