use std::path::Path;
use std::fs::File;
use std::io::{BufReader, Read};
use json_comments::{CommentSettings, StripComments};
use serde_json as json;

use crate::{
    render::Step,
    functions::TemplateFunction,
    error::ParsingError,
};

const SCOPE_KEY: &str = "scope";

fn parse_call(tokens: &[json::Value]) -> Result<Step, String> {
    let (name, args) = match tokens.split_first() {
        Some((name, args)) => (name, args),
        None => return Err("A function call must not be empty".to_string()),
    };

    let name = match name.as_str() {
        Some(name) => name,
        None => return Err(format!("Function name must be a string, found {}", name)),
    };

    let function = name.parse::<TemplateFunction>().map_err(|e| e.to_string())?;
    let mut strings = Vec::with_capacity(args.len());

    for arg in args {
        match arg.as_str() {
            Some(arg) => strings.push(arg.to_string()),
            None => return Err(format!("Arguments of '{}' must be strings, found {}", name, arg)),
        }
    }

    Ok(Step::Call {
        function,
        args: strings,
    })
}

fn parse_step(value: &json::Value) -> Result<Step, String> {
    match value {
        json::Value::String(text) => Ok(Step::Text(text.clone())),
        json::Value::Array(tokens) => parse_call(tokens),
        json::Value::Object(object) => {
            if object.len() != 1 {
                return Err(format!("A scope must be an object with the single key '{}'", SCOPE_KEY));
            }

            match object.get(SCOPE_KEY) {
                Some(json::Value::Array(steps)) => Ok(Step::Scope(parse_steps(steps)?)),
                Some(_) => Err(format!("The value of '{}' must be an array of steps", SCOPE_KEY)),
                None => Err(format!("A scope must be an object with the single key '{}'", SCOPE_KEY)),
            }
        },
        other => Err(format!("'{}' is neither text, a function call nor a scope", other)),
    }
}

fn parse_steps(values: &[json::Value]) -> Result<Vec<Step>, String> {
    values.iter().map(parse_step).collect()
}

pub(crate) fn parse_script(value: json::Value) -> Result<Vec<Step>, String> {
    match value {
        json::Value::Array(steps) => parse_steps(&steps),
        _ => Err("A render script must be an array of steps".to_string()),
    }
}

pub(crate) fn parse_str(script: &str) -> Result<Vec<Step>, String> {
    let reader = StripComments::with_settings(CommentSettings::c_style(), script.as_bytes());
    parse_reader(reader)
}

fn parse_reader<R: Read>(reader: R) -> Result<Vec<Step>, String> {
    let value: json::Value = json::from_reader(reader).map_err(|e| format!("Invalid JSON syntax: {}", e))?;
    parse_script(value)
}

pub(crate) fn parse_json(path: &Path) -> Result<Vec<Step>, ParsingError> {
    let file = File::open(path).map_err(|e| ParsingError::new(path, format!("Could not open file: {}", e)))?;
    let reader = BufReader::new(file);
    let reader = StripComments::with_settings(CommentSettings::c_style(), reader);

    parse_reader(reader).map_err(|e| ParsingError::new(path, e))
}
