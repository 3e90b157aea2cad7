//! The `path_generator` module provides the `generate_path` function that resolves the search
//! settings, loads the dictionary, runs the search, and prints the path.

use crate::path_printer::write_path;
use crate::search_parameters::{SearchParameters, DEFAULT_DICTIONARY};
use crate::DoubletCLArgs;
use doublet_lib::config_file::ConfigurationFileDetails;
use doublet_lib::error::DoubletError;
use doublet_lib::{Dictionary, MutationStrategy, PathSearch, SearchOptions};
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

/// Combine the command line arguments with the optional configuration file.  Values given on
/// the command line take precedence over values from the configuration file, which take
/// precedence over the defaults.
///
/// # Arguments
///
/// * `args` - The command line arguments that control the search.
pub fn resolve_search_parameters(args: &DoubletCLArgs) -> Result<SearchParameters, DoubletError> {
    let configuration = match &args.config {
        Some(config_file) => {
            log::info!("Reading search settings from {}", config_file);
            ConfigurationFileDetails::new_from_file(config_file)?
        }
        None => ConfigurationFileDetails::default(),
    };

    let dictionary = match (&args.dictionary, &configuration.dictionary) {
        (Some(d), _) => PathBuf::from(d),
        (None, Some(d)) => d.clone(),
        (None, None) => PathBuf::from(DEFAULT_DICTIONARY),
    };

    let strategy = if args.ladder {
        MutationStrategy::Substitution
    } else if let Some(strategy_str) = &args.strategy {
        MutationStrategy::from_str(strategy_str)?
    } else {
        configuration.effective_strategy()
    };

    let rearrangement_limit = if args.no_rearrangement_limit {
        None
    } else if args.max_rearrangement_length.is_some() {
        args.max_rearrangement_length
    } else {
        configuration.rearrangement_limit
    };

    Ok(SearchParameters {
        start: args.start.clone().unwrap_or_default(),
        end: args.end.clone().unwrap_or_default(),
        dictionary,
        strategy,
        discord: !args.no_discord && (args.discord || configuration.discord),
        options: SearchOptions {
            max_expansions: args.max_expansions.or(configuration.max_expansions),
            rearrangement_limit,
        },
    })
}

/// Run the search described by `params` against `dictionary`.
///
/// # Arguments
///
/// * `params` - The resolved search parameters.
/// * `dictionary` - The loaded word list.
pub fn search_for_path(
    params: &SearchParameters,
    dictionary: &Dictionary,
) -> Result<Vec<String>, DoubletError> {
    let search = PathSearch::with_options(dictionary, params.strategy, &params.options);
    let (path, statistics) = search.find_path_with_statistics(&params.start, &params.end)?;

    log::info!(
        "Found {} word path from {} to {} ({} words expanded)",
        path.len(),
        params.start,
        params.end,
        statistics.expanded
    );

    Ok(path)
}

/// Run the path generator and write the path to `stream`.
///
/// # Arguments
///
/// * `args` - The command line arguments that control the search.
/// * `stream` - The stream that receives the numbered path.
pub fn generate_path(args: &DoubletCLArgs, stream: &mut dyn Write) -> Result<(), DoubletError> {
    let params = resolve_search_parameters(args)?;

    if let Some(save_config) = &args.save_config {
        params.to_configuration().write_to_file_as_json(save_config)?;
        log::info!("Saved search settings to {}", save_config);
    }

    let dictionary = Dictionary::load_from_file(&params.dictionary)?;
    let path = search_for_path(&params, &dictionary)?;

    write_path(stream, &path, &params.end, params.discord)?;

    Ok(())
}

/// Report the failure, if any, of a call to [`generate_path`].  A missing path is reported with
/// the words exactly as the user typed them.
///
/// # Arguments
///
/// * `stream` - The stream that receives the message.
/// * `result` - The value returned from [`generate_path`].
/// * `start` - The start word as given on the command line.
/// * `end` - The end word as given on the command line.
pub fn report_result<W: Write + ?Sized>(
    stream: &mut W,
    result: Result<(), DoubletError>,
    start: &str,
    end: &str,
) -> std::io::Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(DoubletError::NotFound { .. }) => {
            writeln!(stream, "Could not create doublet from {} to {}", start, end)
        }
        Err(e) => writeln!(stream, "Unable to create doublet: {}", e),
    }
}
