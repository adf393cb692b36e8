//! Demo actions and the state machine that drives them.
//!
//! Every trigger moves the display to `Pending`, runs the action against the
//! transport and then settles into `Succeeded` or `Failed`. Triggers may
//! overlap. Each one takes a generation number when it starts, and a
//! completion is only published while its generation is still the latest, so
//! the most recently triggered action owns the display surface.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use rand::Rng;
use serde_json::{json, Value};
use tokio::{sync::watch, task::JoinHandle};

use crate::transport::{Transport, TransportError};

pub const GET_USER_QUERY: &str = r#"
    query GetUser($id: ID!) {
      getUser(id: $id) { id email name createdAt }
    }
"#;

pub const CREATE_USER_MUTATION: &str = r#"
    mutation CreateUser($input: CreateUserInput!) {
      createUser(input: $input) { id email name createdAt }
    }
"#;

const GET_ALL_QUERIES: [&str; 2] = [
    r#"query { getUser(id: "1") { id email name createdAt } }"#,
    r#"query { getUser(id: "2") { id email name createdAt } }"#,
];

const FALLBACK_MESSAGE: &str = "An error occurred";

/// Exclusive upper bound of the suffix used for generated demo users.
pub const DEMO_SUFFIX_LIMIT: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoAction {
    GetUser { id: String },
    CreateUser,
    GetAllUsers,
}

impl DemoAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::GetUser { .. } => "Query Result",
            Self::CreateUser => "Mutation Result",
            Self::GetAllUsers => "All Users",
        }
    }

    pub fn pending_text(&self) -> &'static str {
        match self {
            Self::CreateUser => "Creating...",
            Self::GetUser { .. } | Self::GetAllUsers => "Loading...",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InteractionState {
    Idle,
    Pending(DemoAction),
    Succeeded { payload: Value, label: String },
    Failed { message: String },
}

/// Input for the `createUser` mutation, made unique by a numeric suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoUser {
    pub email: String,
    pub name: String,
}

impl DemoUser {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::numbered(rng.gen_range(0..DEMO_SUFFIX_LIMIT))
    }

    pub fn numbered(suffix: u32) -> Self {
        Self {
            email: format!("user{suffix}@example.com"),
            name: format!("Demo User {suffix}"),
        }
    }

    fn variables(&self) -> Value {
        json!({
            "input": {
                "email": self.email,
                "name": self.name,
            }
        })
    }
}

pub struct InteractionController<T: ?Sized> {
    transport: Arc<T>,
    surface: watch::Sender<InteractionState>,
    generation: AtomicU64,
}

impl<T> InteractionController<T>
where
    T: Transport + ?Sized + 'static,
{
    pub fn new(transport: Arc<T>) -> Self {
        let (surface, _) = watch::channel(InteractionState::Idle);
        Self {
            transport,
            surface,
            generation: AtomicU64::new(0),
        }
    }

    /// Receiver that observes every published state.
    pub fn subscribe(&self) -> watch::Receiver<InteractionState> {
        self.surface.subscribe()
    }

    pub fn state(&self) -> InteractionState {
        self.surface.borrow().clone()
    }

    /// Fire-and-forget trigger, the way a button press would run it.
    pub fn trigger(self: &Arc<Self>, action: DemoAction) -> JoinHandle<()> {
        let controller = Arc::clone(self);
        tokio::spawn(async move { controller.perform(action).await })
    }

    /// Runs one action to completion and publishes its outcome.
    pub async fn perform(&self, action: DemoAction) {
        // The generation is taken under the channel lock, the same lock the
        // completion check below holds, so `Pending` can never land on top of
        // a newer trigger's settled state.
        let mut generation = 0;
        self.surface.send_modify(|state| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *state = InteractionState::Pending(action.clone());
        });

        let next = match self.dispatch(&action).await {
            Ok(payload) => InteractionState::Succeeded {
                payload,
                label: action.label().to_owned(),
            },
            Err(err) => {
                log::warn!("{:?} failed: {}", action, err);
                InteractionState::Failed {
                    message: failure_message(&err),
                }
            }
        };

        // Checked under the channel lock so a newer trigger's `Pending`
        // cannot be overwritten by this completion.
        let published = self.surface.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            *state = next;
            true
        });
        if !published {
            log::debug!("dropped stale completion of {:?} (generation {})", action, generation);
        }
    }

    async fn dispatch(&self, action: &DemoAction) -> Result<Value, TransportError> {
        match action {
            DemoAction::GetUser { id } => {
                self.transport
                    .execute(GET_USER_QUERY, Some(json!({ "id": id })))
                    .await
            }
            DemoAction::CreateUser => {
                let user = DemoUser::random(&mut rand::thread_rng());
                self.transport
                    .execute(CREATE_USER_MUTATION, Some(user.variables()))
                    .await
            }
            DemoAction::GetAllUsers => {
                let [first, second] = GET_ALL_QUERIES;
                let (first, second) = futures::future::try_join(
                    self.transport.execute(first, None),
                    self.transport.execute(second, None),
                )
                .await?;
                Ok(Value::Array(vec![first, second]))
            }
        }
    }
}

/// Display text of the error, or the fallback when the underlying cause
/// carries no message of its own.
fn failure_message(err: &dyn std::error::Error) -> String {
    let detail = err
        .source()
        .map_or_else(|| err.to_string(), |source| source.to_string());
    if detail.trim().is_empty() {
        FALLBACK_MESSAGE.to_owned()
    } else {
        err.to_string()
    }
}
