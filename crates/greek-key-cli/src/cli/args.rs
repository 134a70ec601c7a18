//! Command-line argument parsing for the generate command.

use std::str::FromStr;

use anyhow::{Context, Result, bail};

use greek_key::PatternKind;

/// Raw flags as given on the command line. `None` means "not given", so
/// values from a config file or the defaults can fill the gap.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CliArgs {
    pub kind: Option<PatternKind>,
    pub config_path: Option<String>,
    pub file: Option<String>,
    pub stroke_width: Option<f64>,
    pub stroke_color: Option<String>,
    pub stroke_opacity: Option<f64>,
    pub border_margin: Option<f64>,
    // rect
    pub size: Option<f64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    // circle
    pub pattern_count: Option<u32>,
    pub radius: Option<f64>,
    pub json: bool,
    pub no_png: bool,
    pub help: bool,
}

/// Parse the value following `args[*i]`, advancing `i` past it.
fn value<T>(args: &[String], i: &mut usize) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let flag = &args[*i];
    *i += 1;
    let raw = args
        .get(*i)
        .with_context(|| format!("{} requires a value", flag))?;
    raw.parse::<T>()
        .with_context(|| format!("invalid value '{}' for {}", raw, flag))
}

impl CliArgs {
    pub fn parse(args: &[String]) -> Result<Self> {
        let mut parsed = CliArgs::default();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--stroke-width" => parsed.stroke_width = Some(value(args, &mut i)?),
                "--stroke-color" => parsed.stroke_color = Some(value(args, &mut i)?),
                "--stroke-opacity" => parsed.stroke_opacity = Some(value(args, &mut i)?),
                "--border-margin" => parsed.border_margin = Some(value(args, &mut i)?),
                "--file" | "-o" => parsed.file = Some(value(args, &mut i)?),
                "--config" | "-c" => parsed.config_path = Some(value(args, &mut i)?),
                "--size" => parsed.size = Some(value(args, &mut i)?),
                "--width" => parsed.width = Some(value(args, &mut i)?),
                "--height" => parsed.height = Some(value(args, &mut i)?),
                "--pattern-count" => parsed.pattern_count = Some(value(args, &mut i)?),
                "--radius" => parsed.radius = Some(value(args, &mut i)?),
                "--json" => parsed.json = true,
                "--no-png" => parsed.no_png = true,
                "-h" | "--help" => parsed.help = true,
                other if !other.starts_with('-') => {
                    let Some(kind) = PatternKind::from_name(other) else {
                        bail!("unknown pattern type '{}'; use 'rect' or 'circle'", other);
                    };
                    if parsed.kind.is_some_and(|k| k != kind) {
                        bail!("only one pattern type may be given");
                    }
                    parsed.kind = Some(kind);
                }
                unknown => bail!("unknown option: {}", unknown),
            }
            i += 1;
        }

        Ok(parsed)
    }

    /// Reject sizing flags that belong to the other pattern type. `kind` is
    /// the resolved type, which may come from a config file.
    pub fn check_type_flags(&self, kind: PatternKind) -> Result<()> {
        let rect_flags = self.size.is_some() || self.width.is_some() || self.height.is_some();
        let circle_flags = self.pattern_count.is_some() || self.radius.is_some();
        match kind {
            PatternKind::Rect if circle_flags => {
                bail!("--pattern-count and --radius only apply to 'circle'")
            }
            PatternKind::Circle if rect_flags => {
                bail!("--size, --width and --height only apply to 'rect'")
            }
            _ => Ok(()),
        }
    }
}

pub fn print_usage() {
    eprintln!("greek-key - Draw a Greek key (meander) border as SVG and PNG");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    greek-key [OPTIONS] <rect|circle> [TYPE OPTIONS]");
    eprintln!("    greek-key patterns");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    --stroke-width <n>     Line thickness in pixels (default: 7.0)");
    eprintln!("    --stroke-color <c>     Line color, name or hex (default: #AB8E0E)");
    eprintln!("    --stroke-opacity <n>   0.0 (transparent) to 1.0 (opaque) (default: 0.7)");
    eprintln!("    --border-margin <n>    Margin around the outer frame (default: 1)");
    eprintln!("    -o, --file <name>      Base name for .svg and .png (default: meander)");
    eprintln!("    -c, --config <file>    YAML file with any of the above settings");
    eprintln!("    --json                 Print geometry as JSON to stdout, write no files");
    eprintln!("    --no-png               Only write the SVG");
    eprintln!();
    eprintln!("RECT OPTIONS:");
    eprintln!("    --size <n>             Key unit length (default: 10)");
    eprintln!("    --width <n>            Number of keys horizontally, >= 3 (default: 16)");
    eprintln!("    --height <n>           Number of keys vertically, >= 3 (default: 9)");
    eprintln!();
    eprintln!("CIRCLE OPTIONS:");
    eprintln!("    --pattern-count <n>    Number of keys around the circle, >= 4 (default: 30)");
    eprintln!("    --radius <n>           Outer radius (default: 300)");
    eprintln!();
    eprintln!("Set RUST_LOG=debug for diagnostic output.");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn parses_global_and_rect_flags() {
        let parsed = CliArgs::parse(&args("--stroke-width 3 --file out rect --size 12 --width 5")).unwrap();
        assert_eq!(parsed.kind, Some(PatternKind::Rect));
        assert_eq!(parsed.stroke_width, Some(3.0));
        assert_eq!(parsed.file.as_deref(), Some("out"));
        assert_eq!(parsed.size, Some(12.0));
        assert_eq!(parsed.width, Some(5));
        assert_eq!(parsed.height, None);
    }

    #[test]
    fn parses_circle_flags() {
        let parsed = CliArgs::parse(&args("circle --pattern-count 8 --radius 150 --json")).unwrap();
        assert_eq!(parsed.kind, Some(PatternKind::Circle));
        assert_eq!(parsed.pattern_count, Some(8));
        assert_eq!(parsed.radius, Some(150.0));
        assert!(parsed.json);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(CliArgs::parse(&args("rect --size ten")).is_err());
        assert!(CliArgs::parse(&args("rect --size")).is_err());
        assert!(CliArgs::parse(&args("hexagon")).is_err());
        assert!(CliArgs::parse(&args("rect --frobnicate")).is_err());
        assert!(CliArgs::parse(&args("rect circle")).is_err());
        assert!(CliArgs::parse(&args("circle --pattern-count -4")).is_err());
    }

    #[test]
    fn flags_of_other_type_are_checked_against_kind() {
        let parsed = CliArgs::parse(&args("--radius 10 --width 10")).unwrap();
        assert!(parsed.check_type_flags(PatternKind::Rect).is_err());
        assert!(parsed.check_type_flags(PatternKind::Circle).is_err());
        let rect_only = CliArgs::parse(&args("--width 10")).unwrap();
        assert!(rect_only.check_type_flags(PatternKind::Rect).is_ok());
    }

    #[test]
    fn help_flag() {
        assert!(CliArgs::parse(&args("--help")).unwrap().help);
    }
}
