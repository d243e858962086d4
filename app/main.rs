use std::{
    fs::File,
    io::{self, Write},
    path::PathBuf,
};

use clap::{Parser, Subcommand};
use log::{debug, info};
use serde::Serialize;
use triangle_classify::{batch, Bounds, Classification, RawSide, Triangle};

#[derive(Debug, Parser)]
#[clap(name = "triangle-classify", version, author)]
struct Opt {
    /// upper bound for side lengths, overrides `TRIANGLE_MAX_SIDE`
    #[clap(long, global = true)]
    max_side: Option<u32>,

    #[clap(subcommand)]
    cmd: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// classify a single triple of side lengths
    Classify {
        #[clap(allow_hyphen_values = true)]
        a: String,
        #[clap(allow_hyphen_values = true)]
        b: String,
        #[clap(allow_hyphen_values = true)]
        c: String,

        /// print a json object instead of the bare label
        #[clap(long)]
        json: bool,

        /// print why the triple was rejected on stderr
        #[clap(long)]
        explain: bool,
    },
    /// classify every row of a csv file with the header `a,b,c`
    Batch {
        /// read from this file instead of stdin
        #[clap(long)]
        input: Option<PathBuf>,

        /// write the report to this file instead of stdout
        #[clap(long)]
        output: Option<PathBuf>,

        /// print per-label counts as json on stderr
        #[clap(long)]
        summary: bool,
    },
}

#[derive(Debug, Serialize)]
struct ClassifyOutput<'a> {
    a: &'a RawSide,
    b: &'a RawSide,
    c: &'a RawSide,
    classification: Classification,
}

fn main() -> Result<(), AppError> {
    env_logger::init();
    let opt = Opt::parse();
    debug!("{opt:?}");

    let bounds = Bounds::configured(opt.max_side)?;
    info!("accepting side lengths {}..={}", bounds.min, bounds.max);

    match opt.cmd {
        Cmd::Classify {
            a,
            b,
            c,
            json,
            explain,
        } => {
            let [a, b, c] = [a, b, c].map(|s| RawSide::parse_arg(&s));
            let classification =
                match Triangle::try_new_with(bounds, a.clone(), b.clone(), c.clone()) {
                    Ok(t) => t.shape(),
                    Err(rejection) => {
                        if explain {
                            eprintln!("{rejection}");
                        }
                        rejection.into()
                    }
                };

            let mut stdout = io::stdout().lock();
            if json {
                let out = ClassifyOutput {
                    a: &a,
                    b: &b,
                    c: &c,
                    classification,
                };
                serde_json::to_writer(&mut stdout, &out)?;
                writeln!(stdout)?;
            } else {
                writeln!(stdout, "{classification}")?;
            }
        }
        Cmd::Batch {
            input,
            output,
            summary,
        } => {
            let report = match &input {
                Some(path) => batch::classify_path(path, bounds)?,
                None => batch::classify_reader(io::stdin().lock(), bounds)?,
            };

            match &output {
                Some(path) => {
                    info!("writing report to {}", path.display());
                    report.write_csv(File::create(path)?)?;
                }
                None => report.write_csv(io::stdout().lock())?,
            }

            if summary {
                let mut stderr = io::stderr().lock();
                serde_json::to_writer_pretty(&mut stderr, &report.summary())?;
                writeln!(stderr)?;
            }
        }
    }

    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Core(#[from] triangle_classify::Error),
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("failed to write json: {0}")]
    Json(#[from] serde_json::Error),
}
