use crate::api::client::ContactStore;
use crate::state::{Event, Request};

/// Runs one backend request and reports the outcome as the event the
/// reducer expects.
pub async fn execute<S>(store: &S, request: Request) -> Event
where
    S: ContactStore + ?Sized,
{
    match request {
        Request::FetchContacts => Event::ContactsFetched(store.list().await),
        Request::CreateContact(contact) => Event::ContactCreated(store.create(&contact).await),
        Request::DeleteContact(id) => {
            let result = store.delete(&id).await;
            Event::ContactDeleted { id, result }
        }
    }
}
