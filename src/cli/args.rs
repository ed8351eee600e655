use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "gridpro",
    version,
    about = "GRIDPRO CLI",
    after_help = "Collage arguments:\n  -i <FILES>...  image files\n  -f <DIR>       use every file in DIR\n  -g <RxC>       grid rows and columns, e.g. 4x4 or 4*4\n  -r <WxH>       output resolution, e.g. 1920x1080\n\n--log, --json and --allow-empty may also appear among the collage arguments."
)]
pub struct CliArgs {
    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Print the resulting configuration as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Succeed even when no input images were collected
    #[arg(long, default_value_t = false)]
    pub allow_empty: bool,

    /// Collage arguments (-i, -f, -g, -r), passed to the parser unchanged
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub tokens: Vec<String>,
}

impl CliArgs {
    /// Move `--log`, `--json` and `--allow-empty` written after the collage
    /// arguments back onto the switches, leaving only parser tokens.
    pub fn with_trailing_switches(mut self) -> Self {
        let mut tokens = Vec::with_capacity(self.tokens.len());
        for token in self.tokens.drain(..) {
            match token.as_str() {
                "--log" => self.log = true,
                "--json" => self.json = true,
                "--allow-empty" => self.allow_empty = true,
                _ => tokens.push(token),
            }
        }
        self.tokens = tokens;
        self
    }
}
