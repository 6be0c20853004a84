//! Token-authenticated operation dispatch.

use serde::de::DeserializeOwned;

use crate::core::{EodError, Operation, net, wire::Envelope};

impl super::EodClient {
    /// POSTs `params` plus the current token to `{endpoint}/{op}` and deserializes the
    /// XML body into `R`.
    ///
    /// `context` identifies the request (exchange, symbol, dates) for fixtures and errors.
    pub(crate) async fn call<R>(
        &self,
        op: Operation,
        params: &[(&'static str, String)],
        context: &str,
    ) -> Result<R, EodError>
    where
        R: DeserializeOwned,
    {
        let token = self.token().await?;

        // Held until the body has been read.
        let _permit = match &self.in_flight {
            Some(sem) => sem.acquire().await.ok(),
            None => None,
        };

        let url = self.endpoint().join(op.as_str())?;

        let mut form: Vec<(&str, &str)> = Vec::with_capacity(params.len() + 1);
        form.push(("Token", token.as_str()));
        form.extend(params.iter().map(|(k, v)| (*k, v.as_str())));

        #[cfg(feature = "tracing")]
        tracing::debug!(operation = op.as_str(), context, "sending request");

        let resp = self.http().post(url.clone()).form(&form).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(EodError::Status {
                status: status.as_u16(),
                url: url.to_string(),
                operation: op.as_str(),
                context: context.to_string(),
            });
        }

        let body = net::get_text(resp, op, context).await?;
        Ok(quick_xml::de::from_str(&body)?)
    }

    /// Like [`call`](Self::call), then requires the envelope's data node.
    ///
    /// A missing node is the service's way of reporting failure; its `Message` attribute
    /// becomes the error text.
    pub(crate) async fn fetch_node<E>(
        &self,
        op: Operation,
        params: &[(&'static str, String)],
        context: &str,
    ) -> Result<E::Node, EodError>
    where
        E: Envelope + DeserializeOwned,
    {
        let envelope: E = self.call(op, params, context).await?;
        let message = envelope
            .message()
            .filter(|m| !m.is_empty())
            .unwrap_or("response carried no data")
            .to_string();

        envelope.into_node().ok_or_else(|| EodError::Api {
            operation: op.as_str(),
            context: context.to_string(),
            message,
        })
    }
}
