use crate::{
    print_json,
    settings::{DesiredList, Settings},
    Result,
};
use std::collections::HashSet;

/// Membership delta between a desired and a current list, partitioned into
/// additions and removals.
#[derive(Debug, Default, PartialEq, serde::Serialize)]
pub struct SyncPlan {
    pub to_add: Vec<String>,
    pub to_remove: Vec<String>,
}

impl SyncPlan {
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// Partition desired against current membership.
///
/// `to_add` is `desired - current`, `to_remove` is `current - desired`. Both
/// are sorted so changes apply in a stable order.
pub fn plan(desired: &HashSet<String>, current: &HashSet<String>) -> SyncPlan {
    let mut to_add: Vec<String> = (desired - current).into_iter().collect();
    let mut to_remove: Vec<String> = (current - desired).into_iter().collect();
    to_add.sort();
    to_remove.sort();
    SyncPlan { to_add, to_remove }
}

/// Reconcile the remote list named in `desired` against its members:
/// authenticate, fetch the current state, compute the delta and apply it one
/// member per call. Any fault or transport error aborts the run, leaving
/// later changes unapplied.
pub async fn run(settings: &Settings, desired: &DesiredList, verbose: bool) -> Result {
    let client = settings.client()?;
    let token = zimbra::auth::authenticate(&client, &settings.user, &settings.password).await?;
    let current = zimbra::dl::get_by_name(&client, &token, &desired.name).await?;

    if verbose {
        println!("Current settings of distribution list {}:", current.name);
        print_json(&current)?;
        println!("Desired state of distribution list {}:", desired.name);
        print_json(desired)?;
    }

    let desired_members: HashSet<String> = desired.members.iter().cloned().collect();
    let current_members: HashSet<String> = current.members.iter().cloned().collect();
    let plan = plan(&desired_members, &current_members);

    for member in &plan.to_add {
        tracing::info!(member, "adding member");
        zimbra::dl::add_member(&client, &token, &current.id, member).await?;
    }
    for member in &plan.to_remove {
        tracing::info!(member, "removing member");
        zimbra::dl::remove_member(&client, &token, &current.id, member).await?;
    }

    Ok(())
}
