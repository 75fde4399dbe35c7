// Lifecycle of one voucher draft: template seeding on entry, reset on
// type switch, and the submit transition. Each page/flow owns its own
// session; there is no ambient shared draft.

use crate::core::{AppError, Result};
use crate::modules::vouchers::models::{VoucherDraft, VoucherType};

use super::submission::voucher_payload;
use super::voucher_api::{VoucherBackend, VoucherRecord};

/// Where the session is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftPhase {
    /// Draft is editable; submission may be started
    Editing,
    /// A submission is in flight; further submits are refused
    Submitting,
}

/// Owns one voucher draft through edit → submit → reset.
#[derive(Debug)]
pub struct DraftSession {
    draft: VoucherDraft,
    phase: DraftPhase,
}

impl DraftSession {
    /// Open a session seeded with the voucher-type template.
    pub fn new(voucher_type: VoucherType) -> Self {
        Self {
            draft: VoucherDraft::template(voucher_type),
            phase: DraftPhase::Editing,
        }
    }

    pub fn draft(&self) -> &VoucherDraft {
        &self.draft
    }

    /// Mutable access for field edits. Edits stay allowed while a
    /// submission is in flight — only a second submit is blocked.
    pub fn draft_mut(&mut self) -> &mut VoucherDraft {
        &mut self.draft
    }

    pub fn phase(&self) -> DraftPhase {
        self.phase
    }

    /// Discard the current draft and reseed the template for `voucher_type`.
    pub fn switch_type(&mut self, voucher_type: VoucherType) {
        tracing::debug!(%voucher_type, "voucher type switched, draft reset to template");
        self.draft = VoucherDraft::template(voucher_type);
    }

    /// Submit the draft through `backend`.
    ///
    /// Runs the required-field and balance checks, refuses while another
    /// submission is in flight, and on success replaces the draft with a
    /// fresh template of the same voucher type. On any failure the draft
    /// is left exactly as submitted so the user can correct and retry.
    ///
    /// The phase only returns to `Editing` when the backend call settles.
    /// If the returned future is dropped mid-flight the session stays in
    /// `Submitting` and refuses further submits, since the backend may
    /// still store the voucher.
    pub async fn submit(&mut self, backend: &dyn VoucherBackend) -> Result<VoucherRecord> {
        if self.phase == DraftPhase::Submitting {
            return Err(AppError::validation("a submission is already in flight"));
        }

        self.draft.validate_for_submit()?;

        let payload = voucher_payload(&self.draft);
        self.phase = DraftPhase::Submitting;

        let outcome = backend.submit_voucher(&payload).await;
        self.phase = DraftPhase::Editing;

        match outcome {
            Ok(record) => {
                tracing::info!(
                    voucher_number = %record.voucher_number,
                    id = record.id,
                    "voucher stored, draft reset"
                );
                self.draft = VoucherDraft::template(self.draft.voucher_type);
                Ok(record)
            }
            Err(err) => {
                tracing::warn!(error = %err, "voucher submission failed, draft preserved");
                Err(err)
            }
        }
    }
}
