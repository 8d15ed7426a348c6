//! `--help`: the bundled manual page

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::TempPath;

use crate::compiler::CommandRunner;
use crate::exit_code;
use crate::ui::console::Console;

/// troff source of `elm-live(1)`
pub const MANPAGE: &str = include_str!("../manpages/elm-live.1");

const BUNDLED_MANPAGE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/manpages/elm-live.1");

/// Where `man` reads the page from. A temporary copy lives until dropped.
enum PageFile {
    Bundled(PathBuf),
    Temporary(TempPath),
}

impl PageFile {
    fn locate() -> io::Result<Self> {
        let bundled = Path::new(BUNDLED_MANPAGE);
        if bundled.is_file() {
            return Ok(PageFile::Bundled(bundled.to_path_buf()));
        }

        let mut file = tempfile::Builder::new()
            .prefix("elm-live")
            .suffix(".1")
            .tempfile()?;
        file.write_all(MANPAGE.as_bytes())?;
        Ok(PageFile::Temporary(file.into_temp_path()))
    }

    fn path(&self) -> &Path {
        match self {
            PageFile::Bundled(path) => path.as_path(),
            PageFile::Temporary(path) => path,
        }
    }
}

/// Show the manual with `man`, or print its source when that fails.
/// Always exits successfully.
pub fn show_manual(runner: &dyn CommandRunner, console: &mut Console<'_>) -> i32 {
    let page = match PageFile::locate() {
        Ok(page) => page,
        Err(e) => {
            console.debug(format!("could not write manual page: {}", e));
            console.print(MANPAGE);
            return exit_code::SUCCESS;
        }
    };

    let args = vec![page.path().display().to_string()];
    console.debug(format!("running man {}", args[0]));

    match runner.run_attached("man", &args) {
        Ok(completion) if !completion.success() => {
            console.debug(format!("man exited with status {:?}", completion.status));
        }
        Ok(_) => {}
        Err(e) => {
            console.debug(format!("could not run man: {}", e));
            console.print(MANPAGE);
        }
    }

    exit_code::SUCCESS
}
