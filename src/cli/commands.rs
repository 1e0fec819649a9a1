//! Command implementations for the content-query CLI.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use log::{debug, info};
use serde_json::{Map, Value};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::descriptor::{
    ContentDescriptor, EditMode, QueryTranslator, RequestContext, TranslatorConfig, callout,
    render, save,
};
use crate::error::{ContentQueryError, Result};

/// Execute a CLI command.
pub fn execute_command(args: ContentQueryArgs) -> Result<()> {
    match &args.command {
        Command::Translate(translate_args) => translate_descriptor(translate_args, &args),
        Command::Save(save_args) => save_data(save_args, &args),
        Command::Render(render_args) => render_data(render_args, &args),
        Command::Callout(callout_args) => classify_tags(callout_args, &args),
    }
}

/// Translate a descriptor file into a search request.
fn translate_descriptor(args: &TranslateArgs, cli_args: &ContentQueryArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            info!("Loading translator config from: {}", path.display());
            TranslatorConfig::from_file(path)?
        }
        None => TranslatorConfig::default(),
    };

    let descriptor = ContentDescriptor::from_json(&read_input(&args.descriptor_file)?)?;
    let context = match &args.site_slug {
        Some(slug) => RequestContext::for_site(slug.as_str()),
        None => RequestContext::new(),
    };
    debug!("Translating {descriptor:?} for {context:?}");

    let request = QueryTranslator::new(config).translate(&descriptor, &context);
    output_json(&request, cli_args)
}

/// Convert editor data into its stored form.
fn save_data(args: &TransformArgs, cli_args: &ContentQueryArgs) -> Result<()> {
    let data = read_object(&args.data_file)?;
    output_json(&save(data, EditMode::from_flag(args.edit)), cli_args)
}

/// Convert stored data into its editor form.
fn render_data(args: &TransformArgs, cli_args: &ContentQueryArgs) -> Result<()> {
    let data = read_object(&args.data_file)?;
    output_json(&render(data, EditMode::from_flag(args.edit)), cli_args)
}

/// Print the callout label for the given tags.
fn classify_tags(args: &CalloutArgs, cli_args: &ContentQueryArgs) -> Result<()> {
    let label = callout(Some(args.tags.as_slice()));
    info!("{} tag(s) classified as {label:?}", args.tags.len());
    output_json(&label, cli_args)
}

/// Read a file, or stdin when the path is `-`.
fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn read_object(path: &Path) -> Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(&read_input(path)?)? {
        Value::Object(map) => Ok(map),
        other => Err(ContentQueryError::invalid_argument(format!(
            "{}: expected a JSON object, found {other}",
            path.display()
        ))),
    }
}
