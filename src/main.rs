use clap::{Parser, Subcommand};
use intitool::cli::{
    decode_file, encode_file, show_types, text_to_ttb, ttb_to_text, CodecOptions, TextConvOptions,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("INTITOOL_VERSION");
const BUILD: &str = env!("INTITOOL_BUILD");
const PROFILE: &str = env!("INTITOOL_PROFILE");
const GIT_HASH: &str = env!("INTITOOL_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "intitool")]
#[command(author, about = "Descrambler for Inti Creates asset and save containers", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode (descramble/decompress) a container file
    #[command(alias = "d")]
    Decode {
        /// Predefined file type (see `types`)
        #[arg(short = 't', long, required = true)]
        filetype: String,

        /// Steam ID, for the save formats that key on it
        #[arg(long)]
        steamid: Option<u64>,

        /// Scrambled input file
        input: PathBuf,

        /// Plain output file
        output: PathBuf,
    },

    /// Encode (compress/scramble) a container file
    #[command(alias = "e")]
    Encode {
        /// Predefined file type (see `types`)
        #[arg(short = 't', long, required = true)]
        filetype: String,

        /// Steam ID, for the save formats that key on it
        #[arg(long)]
        steamid: Option<u64>,

        /// Plain input file
        input: PathBuf,

        /// Scrambled output file
        output: PathBuf,
    },

    /// Convert a scrambled TTB text-resource file to editable text
    #[command(alias = "t")]
    Ttb2txt {
        /// Text container profile (txt for *.ttb, txt2 for *.tb2)
        #[arg(short = 't', long, default_value = "txt")]
        filetype: String,

        /// Scrambled TTB input file
        input: PathBuf,

        /// Text output file
        output: PathBuf,
    },

    /// Convert edited text back into a scrambled TTB file
    #[command(alias = "b")]
    Txt2ttb {
        /// Text container profile (txt for *.ttb, txt2 for *.tb2)
        #[arg(short = 't', long, default_value = "txt")]
        filetype: String,

        /// Text input file
        input: PathBuf,

        /// Scrambled TTB output file
        output: PathBuf,
    },

    /// List the predefined file types
    #[command(alias = "l")]
    Types {
        /// Dump the profile table as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("intitool {}", get_version());
        return ExitCode::SUCCESS;
    }

    // Require a command if not showing version
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            Cli::command().print_help().unwrap();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Decode {
            filetype,
            steamid,
            input,
            output,
        } => {
            let options = CodecOptions { filetype, steamid };
            decode_file(&input, &output, &options).map(|bytes| {
                println!("decoded {} bytes to {}", bytes, output.display());
            })
        }

        Commands::Encode {
            filetype,
            steamid,
            input,
            output,
        } => {
            let options = CodecOptions { filetype, steamid };
            encode_file(&input, &output, &options).map(|bytes| {
                println!("encoded {} bytes to {}", bytes, output.display());
            })
        }

        Commands::Ttb2txt {
            filetype,
            input,
            output,
        } => {
            let options = TextConvOptions { filetype };
            ttb_to_text(&input, &output, &options).map(|records| {
                println!("dumped {} records to {}", records, output.display());
            })
        }

        Commands::Txt2ttb {
            filetype,
            input,
            output,
        } => {
            let options = TextConvOptions { filetype };
            text_to_ttb(&input, &output, &options).map(|records| {
                println!("rebuilt {} records into {}", records, output.display());
            })
        }

        Commands::Types { json } => show_types(json).map(|listing| {
            print!("{}", listing);
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
