use crate::domain::ResponseWriter;

// Buffers the error body until the handler turns it into an HTTP response.
#[derive(Debug, Default)]
pub struct BufferedResponse {
    body: Option<String>,
}

impl BufferedResponse {
    pub fn is_written(&self) -> bool {
        self.body.is_some()
    }

    pub fn take_body(&mut self) -> Option<String> {
        self.body.take()
    }
}

impl ResponseWriter for BufferedResponse {
    fn write(&mut self, body: String) {
        if self.body.is_some() {
            // First body wins; a second write is a bug in the caller.
            tracing::error!("response body already written; dropping second write.");
            return;
        }
        self.body = Some(body);
    }
}
