//! Subcommand definitions.

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clear the policy list (PUT /policy)
    ClearPolicyList {
        /// Request body as JSON
        #[arg(long)]
        body: String,
    },
    /// Delegate a policy to another user (PUT /policy)
    DelegatePolicy {
        /// Request body as JSON
        #[arg(long)]
        body: String,
    },
    /// List the operations the policy server exposes
    Endpoints,
}
