use clap::Parser;
use std::fs;
use std::path::Path;

use tsv2json::cli::{self, path_mapping, Args, CliConfig, CliUtils};
use tsv2json::convert::{ConversionEngine, RunStatistics};
use tsv2json::error::{ConvertError, ConvertResult};
use tsv2json::reader::{directory, TsvSource};

fn main() {
    let args = Args::parse();

    if let Err(error) = run(args) {
        cli::handle_error(&error);
        std::process::exit(1);
    }
}

fn run(args: Args) -> ConvertResult<()> {
    let config = CliConfig::from_args(args)?;
    let engine = ConversionEngine::new(config.convert_config);

    if config.args.stdin {
        return convert_stdin(&engine, &config);
    }

    let input = config.input_path();
    if input.is_dir() {
        convert_directory(&engine, &input, &config)
    } else {
        convert_file(&engine, &input, &config)
    }
}

fn convert_stdin(engine: &ConversionEngine, config: &CliConfig) -> ConvertResult<()> {
    let data = engine.convert_from_source(&TsvSource::Stdin)?;

    if let Some(output) = &config.args.output {
        tsv2json::writer::write_json(output, data.as_str())?;
        CliUtils::show_success(
            &format!("Converted to: {}", output.display()),
            config.is_quiet(),
        );
    } else {
        println!("{}", data.as_str());
    }

    print_stats(&RunStatistics::for_conversion(&data.metadata), config);
    Ok(())
}

fn convert_file(engine: &ConversionEngine, input: &Path, config: &CliConfig) -> ConvertResult<()> {
    // Surface a missing source before touching the destination
    if !input.is_file() {
        return Err(ConvertError::NotFound {
            path: input.to_path_buf(),
        });
    }

    let output = config.output_for(input);
    let data = engine.convert_file(input, &output)?;

    CliUtils::show_success(
        &format!("Converted to: {}", output.display()),
        config.is_quiet(),
    );
    print_stats(&RunStatistics::for_conversion(&data.metadata), config);
    Ok(())
}

fn convert_directory(
    engine: &ConversionEngine,
    input_dir: &Path,
    config: &CliConfig,
) -> ConvertResult<()> {
    let output_dir = config.args.output.as_deref().ok_or_else(|| {
        ConvertError::configuration(
            "output directory required (-o) for directory conversion".to_string(),
        )
    })?;

    fs::create_dir_all(output_dir).map_err(|e| ConvertError::write_error(e, output_dir))?;

    let tsv_files =
        directory::find_tsv_files(input_dir, config.args.recursive).map_err(|e| {
            ConvertError::Io {
                message: format!("failed listing TSV files: {}", e),
                path: Some(input_dir.to_path_buf()),
            }
        })?;

    if tsv_files.is_empty() {
        if !config.is_quiet() {
            println!("No TSV files found in {}", input_dir.display());
        }
        return Ok(());
    }

    if !config.is_quiet() {
        println!("Found {} TSV files", tsv_files.len());
    }

    let mut totals = RunStatistics::new();
    for tsv_file in tsv_files {
        let relative = tsv_file.strip_prefix(input_dir).unwrap_or(&tsv_file);
        let output_file = path_mapping::map_input_to_output(input_dir, &tsv_file, output_dir, "json");

        if let Some(parent) = output_file.parent() {
            fs::create_dir_all(parent).map_err(|e| ConvertError::write_error(e, parent))?;
        }

        match engine.convert_file(&tsv_file, &output_file) {
            Ok(data) => {
                if !config.is_quiet() {
                    println!("✓ {} -> {}", relative.display(), output_file.display());
                }
                totals.combine(&RunStatistics::for_conversion(&data.metadata));
            }
            Err(error) => {
                CliUtils::show_error(&format!(
                    "Error converting {}: {}",
                    relative.display(),
                    error.user_message()
                ));
                if !config.continue_on_error() {
                    return Err(error);
                }
            }
        }
    }

    print_stats(&totals, config);
    Ok(())
}

fn print_stats(stats: &RunStatistics, config: &CliConfig) {
    if config.want_stats() && !config.is_quiet() {
        println!("\n{}", stats.report());
    }
}
