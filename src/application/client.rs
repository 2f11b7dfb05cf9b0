use super::validation::ValidationPipeline;
use crate::config::GatewayConfig;
use crate::domain::event::{EventArguments, GatewayEvent};
use crate::domain::mapping::{TransportMapping, fields};
use crate::domain::message::{Message, MessageKind, PAIRINGS, paired_in};
use crate::domain::ports::{EventSinkBox, MessageValidatorBox, TransportBox, TransportRequest};
use crate::error::{GatewayError, InvalidMessage, Result};
use crate::infrastructure::constraint_validator::ConstraintValidator;
use std::sync::Arc;
use tracing::{debug, warn};

/// Orchestrates message creation, validation and request/response cycles
/// with the gateway.
///
/// The client holds no per-call state: every call builds its own messages
/// and hands them back to the caller.
pub struct GatewayClient {
    config: GatewayConfig,
    transport: Option<TransportBox>,
    validator: MessageValidatorBox,
    event_sink: Option<EventSinkBox>,
    pub(crate) pairings: &'static [(MessageKind, MessageKind)],
}

impl GatewayClient {
    /// Creates a client validating with the declared field rules, without
    /// transport or event sink.
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            config,
            transport: None,
            validator: Box::new(ConstraintValidator::new()),
            event_sink: None,
            pairings: PAIRINGS,
        }
    }

    pub fn with_transport(mut self, transport: TransportBox) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Installs the HTTP transport unless a transport is already set. Fails
    /// when the crate was built without one.
    pub fn with_default_transport(self) -> Result<Self> {
        if self.transport.is_some() {
            return Ok(self);
        }
        #[cfg(feature = "http-transport")]
        {
            let transport =
                crate::infrastructure::http::HttpTransport::new(self.config.request_timeout)?;
            Ok(self.with_transport(Box::new(transport)))
        }
        #[cfg(not(feature = "http-transport"))]
        {
            Err(GatewayError::MissingCollaborator("transport"))
        }
    }

    pub fn with_validator(mut self, validator: MessageValidatorBox) -> Self {
        self.validator = validator;
        self
    }

    pub fn with_event_sink(mut self, event_sink: EventSinkBox) -> Self {
        self.event_sink = Some(event_sink);
        self
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Builds a message from wire fields, publishes its creation event and
    /// validates it.
    ///
    /// # Arguments
    ///
    /// * `kind` - The message variant to build.
    /// * `parameters` - Wire fields of the message.
    /// * `related` - The paired message, if any.
    /// * `strict` - Fail with [`GatewayError::InvalidMessage`] on violations
    ///   instead of returning them attached to the message.
    pub fn create_message(
        &self,
        kind: MessageKind,
        parameters: &TransportMapping,
        related: Option<Arc<Message>>,
        strict: bool,
    ) -> Result<Message> {
        let mut message = Message::from_transport_mapping(kind, parameters);
        message.set_related_message(related)?;
        self.process(message, EventArguments::new(), strict)
    }

    /// Builds a payment request. `MerchantCode` defaults to the configured
    /// seller identifier.
    pub fn create_payment_request(
        &self,
        parameters: &TransportMapping,
        strict: bool,
    ) -> Result<Message> {
        self.create_message(MessageKind::PaymentRequest, parameters, None, strict)
    }

    pub fn create_payment_response(
        &self,
        parameters: &TransportMapping,
        request: Option<Arc<Message>>,
        strict: bool,
    ) -> Result<Message> {
        self.create_message(MessageKind::PaymentResponse, parameters, request, strict)
    }

    pub fn create_payment_notify_response(
        &self,
        parameters: &TransportMapping,
        request: Option<Arc<Message>>,
        strict: bool,
    ) -> Result<Message> {
        self.create_message(MessageKind::PaymentNotifyResponse, parameters, request, strict)
    }

    pub fn create_payment_status_request(
        &self,
        parameters: &TransportMapping,
        strict: bool,
    ) -> Result<Message> {
        self.create_message(MessageKind::PaymentStatusRequest, parameters, None, strict)
    }

    pub fn create_payment_status_response(
        &self,
        parameters: &TransportMapping,
        request: Option<Arc<Message>>,
        strict: bool,
    ) -> Result<Message> {
        self.create_message(MessageKind::PaymentStatusResponse, parameters, request, strict)
    }

    /// Validates a message and attaches the violations to it.
    pub fn validate_message(&self, message: &mut Message, strict: bool) -> Result<()> {
        self.validate_with(message, &EventArguments::new(), strict)
    }

    /// Sends a request and returns the validated response.
    ///
    /// Nothing is dispatched when the request type cannot be sent, or when
    /// strict validation of the request fails.
    pub async fn send(
        &self,
        kind: MessageKind,
        parameters: &TransportMapping,
        strict: bool,
    ) -> Result<Message> {
        if !kind.is_request() {
            return Err(GatewayError::UnsupportedRequestType(kind));
        }
        let response_kind =
            paired_in(kind, self.pairings).ok_or(GatewayError::UnpairedRequestType(kind))?;

        let request = self.create_message(kind, parameters, None, strict)?;
        let transport = self
            .transport
            .as_ref()
            .ok_or(GatewayError::MissingCollaborator("transport"))?;
        let url = request
            .url()
            .ok_or_else(|| GatewayError::InvalidParameters(format!("{request} has no URL")))?
            .to_string();

        debug!(%request, url = %url, "dispatching request");
        let response = transport
            .execute(TransportRequest {
                method: request.http_method(),
                url,
                body: request.to_transport_mapping(),
            })
            .await?;

        if !response.is_success() {
            warn!(
                %request,
                status = response.status,
                reason = %response.reason,
                "unexpected transport status"
            );
            return Err(GatewayError::UnexpectedTransportStatus {
                status: response.status,
                reason: response.reason,
            });
        }

        let mapping =
            TransportMapping::from_response_body(&response.body, response_kind.bare_body_field());
        let mut message = Message::from_transport_mapping(response_kind, &mapping);
        message.set_related_message(Some(Arc::new(request)))?;
        debug!(response = %message, status = response.status, "response built");

        let mut arguments = EventArguments::new();
        arguments.insert("http_status".to_string(), response.status.into());
        self.process(message, arguments, strict)
    }

    fn process(
        &self,
        mut message: Message,
        arguments: EventArguments,
        strict: bool,
    ) -> Result<Message> {
        let kind = message.kind();
        if kind.is_request() {
            self.apply_request_defaults(&mut message);
        }

        if let Some(sink) = &self.event_sink {
            sink.notify(&mut GatewayEvent::created(&mut message, arguments.clone()));
        }

        if kind.is_request()
            && kind.requires_signature()
            && message.signature().is_none()
            && let Some(secret) = self.config.shared_secret()
        {
            message.sign(secret);
        }

        self.validate_with(&mut message, &arguments, strict)?;
        Ok(message)
    }

    fn apply_request_defaults(&self, message: &mut Message) {
        let header = message.header_mut();
        if header.seller_identifier().is_none()
            && let Some(seller) = &self.config.seller_identifier
        {
            debug!(
                field = fields::MERCHANT_CODE,
                "defaulting to the configured seller identifier"
            );
            header.set_seller_identifier(Some(seller.clone()));
        }
    }

    fn validate_with(
        &self,
        message: &mut Message,
        arguments: &EventArguments,
        strict: bool,
    ) -> Result<()> {
        let violations = ValidationPipeline::new(self.validator.as_ref())
            .run(message, self.config.shared_secret())?;
        message.header_mut().set_violations(violations.clone());

        if violations.is_empty() {
            debug!("{message} validated");
            return Ok(());
        }

        warn!(count = violations.len(), "{message} has validation violations");
        if let Some(sink) = &self.event_sink {
            sink.notify(&mut GatewayEvent::violations(message, arguments.clone()));
        }
        if strict {
            return Err(GatewayError::InvalidMessage(Box::new(InvalidMessage {
                message: message.clone(),
                violations,
            })));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::TransportResponse;
    use crate::infrastructure::in_memory::InMemoryTransport;

    fn status_parameters() -> TransportMapping {
        [("RefNo", "REF1"), ("Amount", "100.00")].into_iter().collect()
    }

    #[tokio::test]
    async fn test_unpaired_request_type_is_never_dispatched() {
        let transport = InMemoryTransport::with_responses(vec![TransportResponse::ok("00")]);
        let mut client = GatewayClient::new(GatewayConfig::new("M001", "k"))
            .with_transport(Box::new(transport.clone()));
        client.pairings = &[];

        let result = client
            .send(MessageKind::PaymentStatusRequest, &status_parameters(), false)
            .await;
        assert!(matches!(
            result,
            Err(GatewayError::UnpairedRequestType(MessageKind::PaymentStatusRequest))
        ));
        assert!(transport.requests().await.is_empty());
    }

    #[tokio::test]
    async fn test_response_kind_is_not_sendable() {
        let client = GatewayClient::new(GatewayConfig::new("M001", "k"));
        let result = client
            .send(MessageKind::PaymentStatusResponse, &TransportMapping::new(), false)
            .await;
        assert!(matches!(result, Err(GatewayError::UnsupportedRequestType(_))));
    }

    #[tokio::test]
    async fn test_missing_transport() {
        let client = GatewayClient::new(GatewayConfig::new("M001", "k"));
        let result = client
            .send(MessageKind::PaymentStatusRequest, &status_parameters(), false)
            .await;
        assert!(matches!(result, Err(GatewayError::MissingCollaborator("transport"))));
    }

    #[test]
    fn test_merchant_code_defaults_to_configured_seller() {
        let client = GatewayClient::new(GatewayConfig::new("M001", "k"));
        let message = client
            .create_payment_status_request(&status_parameters(), false)
            .unwrap();
        assert_eq!(message.header().seller_identifier(), Some("M001"));
        assert!(!message.has_violations());
    }

    #[cfg(not(feature = "http-transport"))]
    #[test]
    fn test_default_transport_requires_the_http_feature() {
        let result = GatewayClient::new(GatewayConfig::default()).with_default_transport();
        assert!(matches!(result, Err(GatewayError::MissingCollaborator("transport"))));
    }
}
