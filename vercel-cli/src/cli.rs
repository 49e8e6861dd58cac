use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "vercel-projects")]
#[command(about = "List Vercel projects in a table", long_about = None)]
#[command(version)]
pub struct Cli {
    /// API token, see https://vercel.com/account/tokens
    #[arg(long, env = "VERCEL_TOKEN", hide_env_values = true)]
    pub token: String,

    #[arg(long, env = "VERCEL_API_URL", default_value = vercel_lib::API_ORIGIN)]
    pub api_url: String,

    #[arg(long)]
    pub team_id: Option<String>,

    #[arg(long, default_value = "20")]
    pub limit: usize,

    /// Rows to mark as selected, zero-based
    #[arg(long, value_delimiter = ',')]
    pub select: Vec<usize>,

    #[arg(long)]
    pub select_all: bool,

    #[arg(long, value_parser = ["light", "dark"], default_value = "dark")]
    pub theme: String,

    #[arg(long)]
    pub no_color: bool,

    #[arg(long, value_parser = ["error", "warn", "info", "debug", "trace"], default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["vercel-projects", "--token", "abc"]);
        assert_eq!(cli.token, "abc");
        assert_eq!(cli.api_url, vercel_lib::API_ORIGIN);
        assert_eq!(cli.limit, 20);
        assert!(cli.select.is_empty());
        assert_eq!(cli.theme, "dark");
    }

    #[test]
    fn test_select_list() {
        let cli = Cli::parse_from(["vercel-projects", "--token", "abc", "--select", "0,2"]);
        assert_eq!(cli.select, vec![0, 2]);
    }
}
