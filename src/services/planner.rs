//! Dispatch planning: from a declaration and an operation's result to a
//! flat list of concrete send instructions.
//!
//! Planning is pure and synchronous. Targets that resolve to nothing, or
//! whose derived content fails, contribute zero instructions and never an
//! error; the remaining targets always proceed.

use serde_json::Value;

use crate::config::DispatchConfig;
use crate::models::{Content, NotificationKind, SendInstruction, TargetDeclaration};
use crate::services::resolver::resolve;

/// Produces the send instructions for one completed operation.
///
/// Instruction order is deterministic: primary target first (or the
/// actor shortcut when no primary path is declared), then each additional
/// target in declaration order, recipients in resolver output order.
pub fn plan(
    result: &Value,
    declaration: &TargetDeclaration,
    actor_id: Option<&str>,
    config: &DispatchConfig,
) -> Vec<SendInstruction> {
    let mut instructions = Vec::new();

    if let Some(ref path) = declaration.target_path {
        plan_target(
            &mut instructions,
            result,
            path,
            declaration.message.as_ref(),
            declaration.title.as_ref(),
            declaration.kind,
            config,
        );
    } else if let (Some(actor), Some(message)) = (actor_id, declaration.message.as_ref()) {
        // Self-directed operation: notify the invoking actor only.
        match resolve_content(message, declaration.title.as_ref(), result, config) {
            Ok((message, title)) => instructions.push(SendInstruction {
                recipient_id: actor.to_string(),
                message,
                title,
                kind: declaration.kind,
            }),
            Err(reason) => {
                log::warn!("Skipping actor notification: {}", reason);
            }
        }
    }

    for target in &declaration.additional {
        plan_target(
            &mut instructions,
            result,
            &target.target_path,
            target.message.as_ref(),
            target.title.as_ref(),
            target.kind,
            config,
        );
    }

    instructions
}

/// Plans one declared target: resolve recipients, resolve content, emit
/// one instruction per recipient.
fn plan_target(
    instructions: &mut Vec<SendInstruction>,
    result: &Value,
    path: &str,
    message: Option<&Content>,
    title: Option<&Content>,
    kind: NotificationKind,
    config: &DispatchConfig,
) {
    let message = match message {
        Some(message) => message,
        None => {
            log::debug!("Target '{}' declares no message, skipping", path);
            return;
        }
    };

    let recipients = resolve_with_fallback(result, path, &config.envelope_key);
    if recipients.is_empty() {
        log::debug!("Path '{}' resolved no recipients, skipping", path);
        return;
    }

    // Content is a pure function of the result, so resolve it once and
    // share it across recipients.
    let (message, title) = match resolve_content(message, title, result, config) {
        Ok(content) => content,
        Err(reason) => {
            log::warn!("Skipping target '{}': {}", path, reason);
            return;
        }
    };

    for recipient_id in recipients {
        instructions.push(SendInstruction {
            recipient_id,
            message: message.clone(),
            title: title.clone(),
            kind,
        });
    }
}

/// Resolves a path against the raw result tree, then — when that yields
/// nothing — against the result nested under the conventional envelope
/// key. The first candidate with recipients wins.
fn resolve_with_fallback(result: &Value, path: &str, envelope_key: &str) -> Vec<String> {
    let direct = resolve(result, path);
    if !direct.is_empty() {
        return direct;
    }

    match result.get(envelope_key) {
        Some(enveloped) => resolve(enveloped, path),
        None => Vec::new(),
    }
}

fn resolve_content(
    message: &Content,
    title: Option<&Content>,
    result: &Value,
    config: &DispatchConfig,
) -> Result<(String, String), String> {
    let message = message.resolve(result).map_err(|e| e.to_string())?;
    let title = match title {
        Some(title) => title.resolve(result).map_err(|e| e.to_string())?,
        None => config.default_title.clone(),
    };
    Ok((message, title))
}
