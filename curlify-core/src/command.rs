//! Assembles the curl command line.

use crate::{HeaderVisitor, RequestSnapshot, visit_headers};
use std::collections::HashSet;
use std::fmt::Write;

/// Render a request as a `curl` command.
///
/// Segments are emitted in a fixed order: method, headers (with the declared
/// content type as a fallback `Content-Type`), URL, then the body if it
/// renders to anything other than whitespace. Every input has a rendering.
pub fn generate_curl(
    request: &RequestSnapshot,
    excluded_headers: &HashSet<String>,
    masked_headers: &HashSet<String>,
) -> String {
    let mut builder = CommandBuilder::new(request.method().as_str(), request.content_type());
    visit_headers(
        request.headers(),
        excluded_headers,
        masked_headers,
        &mut builder,
    );
    builder.push_url(request.url());
    builder.push_data(&request.body().render());
    builder.finish()
}

/// Incremental curl command writer.
///
/// Receives headers through [`HeaderVisitor`] and falls back to the declared
/// content type when no `Content-Type` header was written.
#[derive(Debug)]
pub struct CommandBuilder<'a> {
    command: String,
    declared_content_type: Option<&'a str>,
}

impl<'a> CommandBuilder<'a> {
    /// Start a command for the given method.
    pub fn new(method: &str, declared_content_type: Option<&'a str>) -> Self {
        Self {
            command: format!("curl -X {method}"),
            declared_content_type,
        }
    }

    /// Append a `-H` segment.
    pub fn push_header(&mut self, name: &str, value: &str) {
        // Writing to a String cannot fail
        let _ = write!(self.command, " -H \"{name}: {value}\"");
    }

    /// Append the quoted URL.
    pub fn push_url(&mut self, url: &str) {
        let _ = write!(self.command, " \"{url}\"");
    }

    /// Append a `-d` segment unless the body is blank.
    pub fn push_data(&mut self, body: &str) {
        if !body.trim().is_empty() {
            let _ = write!(self.command, " -d '{body}'");
        }
    }

    /// Finish and return the command.
    pub fn finish(self) -> String {
        self.command
    }
}

impl HeaderVisitor for CommandBuilder<'_> {
    fn header(&mut self, name: &str, values: &[String]) {
        self.push_header(name, &values.join("; "));
    }

    fn missing_content_type(&mut self) {
        if let Some(content_type) = self.declared_content_type
            && !content_type.trim().is_empty()
        {
            self.push_header(crate::CONTENT_TYPE, content_type);
        }
    }
}
