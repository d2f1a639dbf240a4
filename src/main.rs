use letterdrill::app::App;
use letterdrill::config::AppConfig;
use letterdrill::Result;

fn main() -> Result<()> {
    let config = AppConfig::load()?;

    let mut app = App::new(&config)?;
    app.init()?;
    app.run()
}
