//! AWS Systems Manager Parameter Store client.
//!
//! Non-recursive `GetParametersByPath` listings are eventually
//! consistent. `PutParameter` with overwrite disabled is the
//! service's atomic put-if-absent.

use super::{ClientError, Parameter, ParameterClient, PutOutcome};
use crate::config::StoreConfig;
use aws_sdk_ssm::config::Region;
use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::types::ParameterType;
use tracing::{debug, instrument, warn};

/// Parameter Store client.
#[derive(Debug, Clone)]
pub struct SsmParameterClient {
    client: aws_sdk_ssm::Client,
}

impl SsmParameterClient {
    /// Wrap an already configured SDK client.
    pub fn new(client: aws_sdk_ssm::Client) -> Self {
        Self { client }
    }

    /// Build a client from the AWS default chain, applying the region and
    /// endpoint overrides in `config`.
    pub async fn from_config(config: &StoreConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        let sdk_config = loader.load().await;

        let mut builder = aws_sdk_ssm::config::Builder::from(&sdk_config);
        if let Some(endpoint) = &config.endpoint_url {
            builder = builder.endpoint_url(endpoint);
        }

        debug!(
            target: "config_store.client.ssm",
            region = ?sdk_config.region(),
            endpoint_override = config.endpoint_url.is_some(),
            "Parameter Store client configured"
        );

        Self::new(aws_sdk_ssm::Client::from_conf(builder.build()))
    }
}

#[async_trait::async_trait]
impl ParameterClient for SsmParameterClient {
    #[instrument(skip_all, name = "ssm.put_parameter", fields(name = %name))]
    async fn put_if_absent(
        &self,
        name: &str,
        value: &str,
        description: &str,
    ) -> Result<PutOutcome, ClientError> {
        let result = self
            .client
            .put_parameter()
            .name(name)
            .value(value)
            .description(description)
            .r#type(ParameterType::String)
            .overwrite(false)
            .send()
            .await;

        match result {
            Ok(_) => Ok(PutOutcome::Created),
            Err(err) => {
                let err = err.into_service_error();
                if err.is_parameter_already_exists() {
                    return Ok(PutOutcome::AlreadyExists);
                }
                let message = DisplayErrorContext(&err).to_string();
                warn!(target: "config_store.client.ssm", error = %message, "PutParameter failed");
                Err(ClientError::Request(message))
            }
        }
    }

    #[instrument(skip_all, name = "ssm.get_parameter", fields(name = %name))]
    async fn get(&self, name: &str) -> Result<Option<String>, ClientError> {
        match self.client.get_parameter().name(name).send().await {
            Ok(output) => {
                let value = output
                    .parameter()
                    .and_then(|p| p.value())
                    .ok_or_else(|| {
                        ClientError::InvalidResponse(format!("parameter {name} has no value"))
                    })?;
                Ok(Some(value.to_string()))
            }
            Err(err) => {
                let err = err.into_service_error();
                if err.is_parameter_not_found() {
                    return Ok(None);
                }
                let message = DisplayErrorContext(&err).to_string();
                warn!(target: "config_store.client.ssm", error = %message, "GetParameter failed");
                Err(ClientError::Request(message))
            }
        }
    }

    #[instrument(skip_all, name = "ssm.get_parameters_by_path", fields(path = %path))]
    async fn list_children(&self, path: &str) -> Result<Vec<Parameter>, ClientError> {
        let mut parameters = Vec::new();
        let mut next_token: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let output = self
                .client
                .get_parameters_by_path()
                .path(path)
                .recursive(false)
                .set_next_token(next_token.take())
                .send()
                .await
                .map_err(|err| {
                    let message = DisplayErrorContext(&err.into_service_error()).to_string();
                    warn!(target: "config_store.client.ssm", error = %message, "GetParametersByPath failed");
                    ClientError::Request(message)
                })?;
            pages += 1;

            for parameter in output.parameters() {
                let (Some(name), Some(value)) = (parameter.name(), parameter.value()) else {
                    return Err(ClientError::InvalidResponse(format!(
                        "parameter listed under {path} is missing its name or value"
                    )));
                };
                parameters.push(Parameter {
                    name: name.to_string(),
                    value: value.to_string(),
                });
            }

            match output.next_token() {
                Some(token) if !token.is_empty() => next_token = Some(token.to_string()),
                _ => break,
            }
        }

        debug!(
            target: "config_store.client.ssm",
            count = parameters.len(),
            pages,
            "Listed parameters"
        );

        Ok(parameters)
    }
}
