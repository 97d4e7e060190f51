use std::path::PathBuf;
use std::rc::Rc;

use bloom::host::Host;
use bloom::{BloomApp, HostConfig};
use bloom_data::StaticContent;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = HostConfig::load(config_path.as_deref())?;
    log::debug!("{config:?}");

    let app = BloomApp::new(Rc::new(StaticContent::new()))?.with_settings(config.settings());
    let mut host = Host::new(app, std::io::stdout().lock(), config);
    host.run(std::io::stdin().lock())
}
