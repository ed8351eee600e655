#![doc = r#"
GRIDPRO — the command-line front end of an image grid/collage tool.

This crate turns a raw list of command-line tokens into a typed `Config`
describing which images to use, how to lay them out in a grid, and the
resolution of the rendered collage. Rendering itself lives elsewhere; this
crate only produces the configuration record.

Parsing runs in two stages:

1. `find_all_flags` scans the tokens and records where each recognized flag
   (`-i`, `-f`, `-g`, `-r`) appears.
2. `make_config` hands every flag the tokens up to the next flag, validates
   them, and fills the `Config`. A rejected flag adds one `ParseError` and
   parsing carries on with the rest.

Flags
-----
| Flag | Meaning | Arguments |
|------|---------|-----------|
| `-i` | explicit image files | zero or more paths |
| `-f` | folder whose files are the inputs | exactly one directory |
| `-g` | grid rows and columns | `RxC` or `R*C` |
| `-r` | output width and height | `WxH` or `W*H` |

Quick start
-----------
```rust
use gridpro::{parse_args, GridSize, Resolution};

fn main() -> gridpro::Result<()> {
    let report = parse_args(&["-i", "a.jpg", "b.jpg", "-g", "1x2", "-r", "1024*768"]);
    let config = report.into_result()?;

    assert_eq!(config.input_files, vec!["a.jpg", "b.jpg"]);
    assert_eq!(config.grid, Some(GridSize { rows: 1, cols: 2 }));
    assert_eq!(config.resolution, Some(Resolution { width: 1024, height: 768 }));
    Ok(())
}
```

Inspecting partial results
--------------------------
Errors never abort the parse. The report keeps whatever succeeded next to the
list of rejected flags, in the order they appeared:

```rust
use gridpro::{parse_args, Flag};

let report = parse_args(&["-i", "a.jpg", "-g", "25i25", "-r", "800x600"]);

assert_eq!(report.config.input_files, vec!["a.jpg"]);
assert_eq!(report.config.output_width(), 800);
assert!(!report.config.grid_set());
assert_eq!(report.errors.len(), 1);
assert_eq!(report.errors[0].flag(), Flag::Grid);
assert!(report.errors[0].to_string().contains("wrong grid format"));
```

Running the stages yourself
---------------------------
```rust,no_run
use gridpro::{find_all_flags, make_config};

let args: Vec<String> = std::env::args().skip(1).collect();
let positions = find_all_flags(&args);
let (config, errors) = make_config(&args, &positions);

for e in &errors {
    eprintln!("{e}");
}
println!("{}", config.to_json_pretty().unwrap_or_default());
```

Folder listing
--------------
`-f` lists its directory through the `DirLister` trait. `make_config` and
`parse_args` use `FsDirLister`; pass any `Fn(&Path) -> io::Result<Vec<PathBuf>>`
to `parse_args_with` or `make_config_with` to list from somewhere else:

```rust
use std::io;
use std::path::{Path, PathBuf};
use gridpro::parse_args_with;

fn fixtures(dir: &Path) -> io::Result<Vec<PathBuf>> {
    Ok(vec![dir.join("1.png"), dir.join("2.png")])
}

let report = parse_args_with(&["-f", "shots", "-g", "1x2"], &fixtures);
assert!(report.is_ok());
assert_eq!(report.config.input_files.len(), 2);
```

Useful modules
--------------
- [`api`] — high-level entry points and `ParseReport`.
- [`core`] — the two parsing stages, `Config`, and `ParseError`.
- [`types`] — `Flag`, `FlagPositions`, `GridSize`, `Resolution`.
- [`io`] — directory listing for `-f`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::build::{make_config, make_config_with};
pub use crate::core::config::Config;
pub use crate::core::error::ParseError;
pub use crate::core::locate::find_all_flags;
pub use crate::error::{Error, Result};
pub use crate::io::folder::{DirLister, FsDirLister};
pub use crate::types::{Flag, FlagPositions, GridSize, Resolution};

pub use crate::api::{ParseReport, parse_args, parse_args_with, parse_env_args};
