use std::{fmt, fs, path::Path};

use crate::error::{Error, Result};

/// A single step of a simulation script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// `REQUEST <name> <size>`
    Allocate { name: String, size: usize },
    /// `RELEASE <name>`
    Release { name: String },
}

impl Request {
    pub fn allocate(name: impl Into<String>, size: usize) -> Self {
        Request::Allocate {
            name: name.into(),
            size,
        }
    }

    pub fn release(name: impl Into<String>) -> Self {
        Request::Release { name: name.into() }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Request::Allocate { name, size } => write!(f, "REQUEST {} {} KB", name, size),
            Request::Release { name } => write!(f, "RELEASE {}", name),
        }
    }
}

/// A parsed simulation script: the capacity of the address space followed by
/// the requests to replay against it.
///
/// ```text
/// 100
/// REQUEST A 30
/// REQUEST B 40
/// RELEASE A
/// ```
///
/// Blank lines and lines starting with `#` are ignored. Any other line that
/// doesn't parse aborts the whole script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub total_memory: usize,
    pub requests: Vec<Request>,
}

impl Script {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        tracing::debug!("read {} bytes from {}", content.len(), path.display());

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut lines = content
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

        let Some((line_no, line)) = lines.next() else {
            return Err(Error::Parse {
                line: 1,
                reason: "missing total memory".into(),
            });
        };

        let total_memory = parse_capacity(line_no, line)?;

        let requests = lines
            .map(|(line_no, line)| parse_request(line_no, line))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            total_memory,
            requests,
        })
    }
}

fn parse_capacity(line_no: usize, line: &str) -> Result<usize> {
    let value: i64 = line.parse().map_err(|_| Error::Parse {
        line: line_no,
        reason: format!("expected total memory, got `{}`", line),
    })?;

    if value <= 0 {
        return Err(Error::InvalidCapacity(value));
    }

    usize::try_from(value).map_err(|_| Error::InvalidCapacity(value))
}

fn parse_request(line_no: usize, line: &str) -> Result<Request> {
    let parse_err = |reason: String| Error::Parse {
        line: line_no,
        reason,
    };

    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens.as_slice() {
        ["REQUEST", name, size] => {
            let size: i64 = size
                .parse()
                .map_err(|_| parse_err(format!("size `{}` is not an integer", size)))?;

            if size <= 0 {
                return Err(parse_err(
                    Error::InvalidSize {
                        name: name.to_string(),
                        size,
                    }
                    .to_string(),
                ));
            }

            Ok(Request::allocate(*name, size as usize))
        }
        ["RELEASE", name] => Ok(Request::release(*name)),
        ["REQUEST", ..] => Err(parse_err("usage: REQUEST <name> <size>".into())),
        ["RELEASE", ..] => Err(parse_err("usage: RELEASE <name>".into())),
        [command, ..] => Err(parse_err(format!("unknown command `{}`", command))),
        [] => unreachable!("blank lines are filtered out"),
    }
}
