//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver, then answer the
//! requests it sends with helpers like [`expect_create`] or [`expect_action`].

use tokio::sync::mpsc;

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest, Response};

/// Creates a mock client and a receiver for asserting requests.
///
/// The client's messages land on `receiver` instead of a running
/// `ResourceActor`, so a test can inspect each request and choose the reply.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next message must be a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreatePayload, Response<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Next message must be a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message must be a List request
pub async fn expect_list<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<Response<Vec<T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Next message must be an Action request
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Reply to a request with a storage failure.
pub fn fail_with_storage<R>(respond_to: Response<R>, message: &str) {
    let _ = respond_to.send(Err(FrameworkError::Storage(message.to_string())));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ApplicantInfo, ApplicationCreate, JobApplication};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<JobApplication>(10);

        let create_task = tokio::spawn(async move {
            let payload = ApplicationCreate {
                job_id: "order-fulfillment".to_string(),
                job_title: "Order Fulfillment Specialist".to_string(),
                applicant_info: ApplicantInfo::default(),
            };
            client.create(payload).await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.job_id, "order-fulfillment");
        responder.send(Ok("APP-1".to_string())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok("APP-1".to_string()));
    }
}
