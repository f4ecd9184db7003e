use std::path::PathBuf;

use argh::FromArgs;
use cvtgfx_core::{Job, Mode, Sheet, number, render};
use log::{error, info};

use crate::std_fs::StdFilesystem;

mod preview;
mod std_fs;

const USAGE: &str = "cvtgfx <tile|sprite> <obj_name> <ASCII_art_file> <offset_x> <offset_y> <x_tiles> <y_tiles> <x_virtual_size> <xlate_file>";

#[derive(FromArgs, Debug, PartialEq)]
/// Convert ASCII art into HuC6270 tile or sprite data. Integer arguments are
/// decimal, or hexadecimal with a `$` or `0x` prefix.
struct Args {
    /// pattern format, `tile` (8x8) or `sprite` (16x16)
    #[argh(positional)]
    mode: Mode,

    /// name of the generated array and stem of the output file
    #[argh(positional)]
    object_name: String,

    /// ASCII art input file
    #[argh(positional)]
    art_file: String,

    /// first art column to sample
    #[argh(positional, from_str_fn(parse_int))]
    offset_x: usize,

    /// first art line to sample
    #[argh(positional, from_str_fn(parse_int))]
    offset_y: usize,

    /// number of patterns across
    #[argh(positional, from_str_fn(parse_int))]
    x_tiles: usize,

    /// number of patterns down
    #[argh(positional, from_str_fn(parse_int))]
    y_tiles: usize,

    /// row stride of the output array, in patterns
    #[argh(positional, from_str_fn(parse_int))]
    virt_width: usize,

    /// translation file, its first line lists the characters for values 0 to 15
    #[argh(positional)]
    xlate_file: String,

    /// author named in the generated header
    #[argh(option, default = "String::from(\"David Shadoff\")")]
    author: String,

    /// also write a grayscale PNG of the converted patterns
    #[argh(option)]
    preview: Option<PathBuf>,

    /// also write the raw pattern bytes to `<object_name>.bin`
    #[argh(switch)]
    raw: bool,
}

fn parse_int(value: &str) -> Result<usize, String> {
    number::parse_int(value).map_err(|err| format!("'{value}' is not a valid integer: {err}"))
}

impl Args {
    fn job(&self) -> Job {
        Job {
            mode: self.mode,
            name: self.object_name.clone(),
            art_path: self.art_file.clone(),
            xlate_path: self.xlate_file.clone(),
            sheet: Sheet {
                offset_x: self.offset_x,
                offset_y: self.offset_y,
                x_tiles: self.x_tiles,
                y_tiles: self.y_tiles,
                virt_width: self.virt_width,
            },
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();
    let job = args.job();
    info!(
        "Converting {} {} pattern(s) of {} from ({}, {})",
        job.sheet.tile_count(),
        job.mode.repr(),
        job.art_path,
        job.sheet.offset_x,
        job.sheet.offset_y
    );

    let fs = StdFilesystem::new_with_base_path(".".into());
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let conversion = match job.run(&fs, &timestamp, &args.author) {
        Ok(conversion) => conversion,
        Err(err) => {
            error!("Conversion failed: {:?}", err);
            println!("{err}");
            println!();
            println!("Usage:");
            println!("    {USAGE}");
            std::process::exit(1);
        }
    };

    if args.raw {
        if let Err(err) = job.write_raw(&fs, &conversion) {
            error!("Raw output failed: {:?}", err);
            println!("Failed to write raw data: {err}");
            std::process::exit(1);
        }
    }

    if let Some(path) = &args.preview {
        if let Err(err) = preview::save(path, job.mode, &job.sheet, &conversion.data) {
            println!("Failed to write preview {}: {err}", path.display());
            std::process::exit(1);
        }
    }

    info!("Done, {} is ready", render::file_name(&job.name));
}

#[cfg(test)]
#[rustfmt::skip]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, argh::EarlyExit> {
        Args::from_args(&["cvtgfx"], args)
    }

    #[test]
    fn test_positional_contract() {
        let args = parse(&["sprite", "spr0_data", "sprdata.txt", "16", "0", "2", "2", "2", "sprdata.xlate"]).unwrap();
        assert_eq!(args.mode, Mode::Sprite);
        assert_eq!(args.object_name, "spr0_data");
        assert_eq!(args.author, "David Shadoff");
        assert!(!args.raw);
        assert_eq!(args.preview, None);

        let job = args.job();
        assert_eq!(job.art_path, "sprdata.txt");
        assert_eq!(job.xlate_path, "sprdata.xlate");
        assert_eq!(job.sheet, Sheet { offset_x: 16, offset_y: 0, x_tiles: 2, y_tiles: 2, virt_width: 2 });
    }

    #[test]
    fn test_hex_and_case() {
        let args = parse(&["TILE", "bg", "bg.txt", "$10", "0x08", "0X2", "1", "4", "bg.xlate"]).unwrap();
        assert_eq!(args.mode, Mode::Tile);
        assert_eq!((args.offset_x, args.offset_y, args.x_tiles, args.virt_width), (16, 8, 2, 4));
    }

    #[test]
    fn test_usage_errors() {
        // Too few and too many positionals.
        assert!(parse(&["tile", "bg", "bg.txt", "0", "0", "1", "1", "1"]).is_err());
        assert!(parse(&["tile", "bg", "bg.txt", "0", "0", "1", "1", "1", "bg.xlate", "extra"]).is_err());
        // Unknown mode and malformed integers.
        assert!(parse(&["sprites", "bg", "bg.txt", "0", "0", "1", "1", "1", "bg.xlate"]).is_err());
        assert!(parse(&["tile", "bg", "bg.txt", "0x", "0", "1", "1", "1", "bg.xlate"]).is_err());
        assert!(parse(&["tile", "bg", "bg.txt", "0", "-1", "1", "1", "1", "bg.xlate"]).is_err());
    }

    #[test]
    fn test_options() {
        let args = parse(&[
            "tile", "bg", "bg.txt", "0", "0", "1", "1", "1", "bg.xlate",
            "--author", "someone", "--preview", "bg.png", "--raw",
        ]).unwrap();
        assert_eq!(args.author, "someone");
        assert_eq!(args.preview, Some(PathBuf::from("bg.png")));
        assert!(args.raw);
    }
}
