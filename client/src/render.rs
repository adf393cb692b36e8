use crate::controller::InteractionState;

pub const IDLE_TEXT: &str = "Click a button to see results...";

pub fn render(state: &InteractionState) -> String {
    match state {
        InteractionState::Idle => IDLE_TEXT.to_owned(),
        InteractionState::Pending(action) => action.pending_text().to_owned(),
        InteractionState::Succeeded { payload, label } => {
            let body =
                serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());
            format!("✓ {label}\n{body}")
        }
        InteractionState::Failed { message } => format!("✗ Error\n{message}"),
    }
}
