use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;

pub const DEFAULT_MENU_URL: &str = "http://www.pvv.co.kr/bbs/download.php?bbsMode=fileDown&code=bbs_menu01&id=737&filename=%C6%C7%B1%B310%BF%F93%C1%D6(1).pdf";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "pangyo-catering-api",
    version,
    about = "Serves the weekly cafeteria menu parsed from its PDF"
)]
pub struct Config {
    /// Weekly menu PDF used when a request does not name one.
    #[arg(long, env = "MENU_PDF_URL", default_value = DEFAULT_MENU_URL)]
    pub menu_url: String,

    #[arg(long, env = "MENU_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    #[arg(long, env = "MENU_USER_AGENT", default_value = "pangyo-catering-api/0.1")]
    pub user_agent: String,

    #[arg(long, env = "MENU_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Skip TLS certificate verification when downloading the PDF.
    #[arg(long, env = "MENU_ACCEPT_INVALID_CERTS", default_value_t = false)]
    pub accept_invalid_certs: bool,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            menu_url: DEFAULT_MENU_URL.to_string(),
            bind: SocketAddr::from(([0, 0, 0, 0], 3000)),
            user_agent: "pangyo-catering-api/0.1".to_string(),
            timeout_secs: 30,
            accept_invalid_certs: false,
        }
    }
}
