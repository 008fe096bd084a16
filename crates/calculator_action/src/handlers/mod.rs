use std::io::{self, Read, Write};

use crate::core::{
    calculator,
    error::{CalculatorError, CalculatorResult},
    models::CalculatorRequest,
};

/// Run one request/response exchange
///
/// Reads the first request document from `input` and writes the response
/// followed by a newline to `output`. Anything after the first document is
/// left unread. Nothing is written when the request fails.
pub fn run<R: Read, W: Write>(input: R, mut output: W) -> CalculatorResult<()> {
    let request = read_request(input)?;
    tracing::debug!(action = %request.action, "decoded calculator request");

    let response = calculator::evaluate(&request)?;

    // Encode fully before touching the writer so a failed encode leaves no partial output
    let mut document = serde_json::to_vec(&response).map_err(CalculatorError::OutputEncode)?;
    document.push(b'\n');
    output
        .write_all(&document)
        .and_then(|_| output.flush())
        .map_err(|e| CalculatorError::OutputEncode(serde_json::Error::io(e)))?;

    Ok(())
}

/// Decode the first JSON document from `input`
fn read_request<R: Read>(input: R) -> CalculatorResult<CalculatorRequest> {
    serde_json::Deserializer::from_reader(input)
        .into_iter::<CalculatorRequest>()
        .next()
        .unwrap_or_else(|| Err(serde_json::Error::io(io::ErrorKind::UnexpectedEof.into())))
        .map_err(CalculatorError::InputDecode)
}
