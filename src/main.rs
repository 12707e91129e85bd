use anyhow::Result;
use clap::{Parser, Subcommand};
use devkit::areas::input::InputSource;
use devkit::areas::settings::{ColorMode, DEFAULT_LOG_FILTER, LOG_ENV, Settings};
use devkit::areas::toolbox::Toolbox;
use devkit::artifacts::codegen::java_bean::DEFAULT_CLASS_NAME;
use devkit::artifacts::convert::ascii::AsciiTarget;
use devkit::artifacts::convert::ascii_art::ArtStyle;
use devkit::artifacts::convert::caesar::DEFAULT_SHIFT;
use devkit::artifacts::convert::case::CaseStyle;
use devkit::artifacts::convert::reverse::ReverseMode;
use devkit::artifacts::convert::unicode::{EscapeStyle, UnicodeTarget};
use devkit::artifacts::core::PagerWriter;
use devkit::artifacts::diff::diff_filter::{DiffFilter, parse_diff_filter};
use devkit::artifacts::diff::granularity::Granularity;
use devkit::artifacts::diff::render::OutputFormat;
use devkit::commands::compare::diff::DiffOptions;
use devkit::commands::compare::json_diff::JsonDiffOptions;
use devkit::commands::transform::ascii::AsciiOptions;
use devkit::commands::transform::ascii_art::AsciiArtOptions;
use devkit::commands::transform::base64::Base64Options;
use devkit::commands::transform::caesar::CaesarOptions;
use devkit::commands::transform::case::CaseOptions;
use devkit::commands::transform::format_json::FormatJsonOptions;
use devkit::commands::transform::format_xml::FormatXmlOptions;
use devkit::commands::transform::java_bean::JavaBeanOptions;
use devkit::commands::transform::reverse::ReverseOptions;
use devkit::commands::transform::unicode::UnicodeOptions;
use minus::Pager;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "devkit",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Everyday developer text utilities",
    long_about = "A toolbox of small developer utilities: text and JSON diffs, \
    JSON and XML formatting, text case and encoding conversions, a Caesar \
    cipher, ASCII banners and a Java bean generator. Single-text tools read their input from the \
    argument or, when it is omitted, from standard input.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto, help = "When to color the output")]
    color: ColorMode,
    #[arg(long, global = true, help = "Print diffs directly instead of through the pager")]
    no_pager: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "diff",
        about = "Compare two texts by character, word or line",
        long_about = "This command computes a minimal list of unchanged, added and removed tokens \
        turning OLD into NEW. OLD and NEW are file paths (use - for standard input on one side) \
        or, with --text, the texts themselves."
    )]
    Diff {
        #[arg(index = 1, help = "The old side")]
        old: String,
        #[arg(index = 2, help = "The new side")]
        new: String,
        #[arg(short, long, help = "Treat OLD and NEW as literal text instead of paths")]
        text: bool,
        #[arg(short, long, value_enum, default_value_t = Granularity::Line, help = "The unit of comparison")]
        granularity: Granularity,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Inline, help = "How to print the diff")]
        format: OutputFormat,
        #[arg(
            long = "diff-filter",
            value_parser = parse_diff_filter,
            default_value = "ARU",
            help = "Ops to print in lines and json output: (A)dded, (R)emoved, (U)nchanged"
        )]
        filter: DiffFilter,
        #[arg(long, help = "Print op counts and the edit distance")]
        stat: bool,
    },
    #[command(
        name = "json-diff",
        about = "Compare two JSON documents ignoring key order",
        long_about = "This command sorts object keys in both documents, pretty-prints them \
        and compares the results line by line."
    )]
    JsonDiff {
        #[arg(index = 1, help = "The old document")]
        old: String,
        #[arg(index = 2, help = "The new document")]
        new: String,
        #[arg(short, long, help = "Treat OLD and NEW as literal JSON instead of paths")]
        text: bool,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Lines, help = "How to print the diff")]
        format: OutputFormat,
        #[arg(long, help = "Print op counts and the edit distance")]
        stat: bool,
    },
    #[command(name = "format-json", about = "Pretty-print or minify JSON")]
    FormatJson {
        #[arg(index = 1, help = "The JSON text")]
        text: Option<String>,
        #[arg(short, long, help = "Print on a single line")]
        minify: bool,
        #[arg(short, long, help = "Undo string escaping before parsing")]
        unescape: bool,
    },
    #[command(name = "format-xml", about = "Re-indent an XML document")]
    FormatXml {
        #[arg(index = 1, help = "The XML text")]
        text: Option<String>,
    },
    #[command(name = "case", about = "Convert text to upper, lower, title or sentence case")]
    Case {
        #[arg(index = 1)]
        text: Option<String>,
        #[arg(short = 't', long = "to", value_enum, help = "The target case")]
        style: CaseStyle,
    },
    #[command(name = "reverse", about = "Reverse characters, words or sentences")]
    Reverse {
        #[arg(index = 1)]
        text: Option<String>,
        #[arg(short = 'b', long = "by", value_enum, default_value_t = ReverseMode::Char, help = "What to reverse")]
        mode: ReverseMode,
    },
    #[command(name = "ascii", about = "Convert text to character codes and back")]
    Ascii {
        #[arg(index = 1)]
        text: Option<String>,
        #[arg(short, long = "to", value_enum, help = "The target representation")]
        target: AsciiTarget,
    },
    #[command(name = "unicode", about = "Escape text as Unicode code units and back")]
    Unicode {
        #[arg(index = 1)]
        text: Option<String>,
        #[arg(short, long = "to", value_enum, help = "The target representation")]
        target: UnicodeTarget,
        #[arg(short, long, value_enum, default_value_t = EscapeStyle::Backslash, help = "The escape notation")]
        style: EscapeStyle,
    },
    #[command(name = "base64", about = "Encode or decode Base64 text")]
    Base64 {
        #[arg(index = 1)]
        text: Option<String>,
        #[arg(short, long, help = "Decode instead of encoding")]
        decode: bool,
        #[arg(short = 'u', long, help = "Use the URL and filename safe alphabet")]
        url_safe: bool,
    },
    #[command(name = "caesar", about = "Encrypt or decrypt with a Caesar cipher")]
    Caesar {
        #[arg(index = 1)]
        text: Option<String>,
        #[arg(short, long, default_value_t = DEFAULT_SHIFT, allow_negative_numbers = true, help = "Places to rotate each letter by")]
        shift: i32,
        #[arg(short, long, help = "Rotate backwards")]
        decrypt: bool,
    },
    #[command(name = "ascii-art", about = "Render text as a three-row ASCII banner")]
    AsciiArt {
        #[arg(index = 1)]
        text: Option<String>,
        #[arg(short, long, value_enum, default_value_t = ArtStyle::Standard, help = "The banner style")]
        style: ArtStyle,
    },
    #[command(
        name = "java-bean",
        about = "Generate a Java bean class from a JSON object",
        long_about = "This command derives a Java class with private fields, getters and setters \
        from the shape of a JSON object. Nested objects become static nested classes."
    )]
    JavaBean {
        #[arg(index = 1, help = "The JSON object")]
        text: Option<String>,
        #[arg(short, long, default_value = DEFAULT_CLASS_NAME, help = "The name of the root class")]
        class_name: String,
    },
    #[command(name = "list", about = "List the available tools")]
    List,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs `command` against stdout, or against the pager when `paged` is set and
/// the settings allow it.
fn run_with_output(
    settings: Settings,
    paged: bool,
    command: impl FnOnce(&Toolbox) -> Result<()>,
) -> Result<()> {
    if paged && settings.use_pager {
        let writer = PagerWriter::new(Pager::new());
        let pager = writer.pager().clone();
        let toolbox = Toolbox::new(settings, Box::new(writer), Box::new(std::io::stdin()));

        command(&toolbox)?;
        minus::page_all(pager)?;
    } else {
        let toolbox = Toolbox::new(
            settings,
            Box::new(std::io::stdout()),
            Box::new(std::io::stdin()),
        );

        command(&toolbox)?;
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let settings = Settings::resolve(cli.color, cli.no_pager);
    colored::control::set_override(settings.colorize);
    tracing::debug!(?settings, "resolved settings");

    match cli.command {
        Commands::Diff {
            old,
            new,
            text,
            granularity,
            format,
            filter,
            stat,
        } => {
            let opts = DiffOptions {
                old: InputSource::from_arg(&old, text),
                new: InputSource::from_arg(&new, text),
                granularity,
                format,
                filter,
                stat,
            };

            run_with_output(settings, true, |toolbox| toolbox.diff(&opts))?
        }
        Commands::JsonDiff {
            old,
            new,
            text,
            format,
            stat,
        } => {
            let opts = JsonDiffOptions {
                old: InputSource::from_arg(&old, text),
                new: InputSource::from_arg(&new, text),
                format,
                stat,
            };

            run_with_output(settings, true, |toolbox| toolbox.json_diff(&opts))?
        }
        Commands::FormatJson {
            text,
            minify,
            unescape,
        } => {
            let opts = FormatJsonOptions {
                text,
                minify,
                unescape,
            };

            run_with_output(settings, false, |toolbox| toolbox.format_json(&opts))?
        }
        Commands::FormatXml { text } => {
            let opts = FormatXmlOptions { text };
            run_with_output(settings, false, |toolbox| toolbox.format_xml(&opts))?
        }
        Commands::Case { text, style } => {
            let opts = CaseOptions { text, style };
            run_with_output(settings, false, |toolbox| toolbox.case(&opts))?
        }
        Commands::Reverse { text, mode } => {
            let opts = ReverseOptions { text, mode };
            run_with_output(settings, false, |toolbox| toolbox.reverse(&opts))?
        }
        Commands::Ascii { text, target } => {
            let opts = AsciiOptions { text, target };
            run_with_output(settings, false, |toolbox| toolbox.ascii(&opts))?
        }
        Commands::Unicode {
            text,
            target,
            style,
        } => {
            let opts = UnicodeOptions {
                text,
                target,
                style,
            };

            run_with_output(settings, false, |toolbox| toolbox.unicode(&opts))?
        }
        Commands::Base64 {
            text,
            decode,
            url_safe,
        } => {
            let opts = Base64Options {
                text,
                decode,
                url_safe,
            };

            run_with_output(settings, false, |toolbox| toolbox.base64(&opts))?
        }
        Commands::Caesar {
            text,
            shift,
            decrypt,
        } => {
            let opts = CaesarOptions {
                text,
                shift,
                decrypt,
            };

            run_with_output(settings, false, |toolbox| toolbox.caesar(&opts))?
        }
        Commands::AsciiArt { text, style } => {
            let opts = AsciiArtOptions { text, style };
            run_with_output(settings, false, |toolbox| toolbox.ascii_art(&opts))?
        }
        Commands::JavaBean { text, class_name } => {
            let opts = JavaBeanOptions { text, class_name };
            run_with_output(settings, false, |toolbox| toolbox.java_bean(&opts))?
        }
        Commands::List => run_with_output(settings, false, |toolbox| toolbox.list())?,
    }

    Ok(())
}
