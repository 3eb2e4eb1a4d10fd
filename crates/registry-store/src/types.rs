//! Member records and the registry document.

use crate::error::SubmissionError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field names the registry assigns itself; submissions may not supply them.
const RESERVED_FIELDS: &[&str] = &["id", "shares", "pricePerShare"];

/// A submitted, unapproved registration record.
///
/// Beyond the assigned `id`, all submitted fields are carried verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingMember {
    pub id: u64,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// A pending member promoted into the approved roster.
///
/// Share-holding fields are initialized to zero at approval time and
/// the original submission fields are preserved unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovedMember {
    pub id: u64,
    pub shares: u64,
    pub price_per_share: u64,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// A validated member submission.
///
/// The boundary schema requires a non-empty string `name`; any other
/// fields are accepted and preserved verbatim. Registry-assigned
/// fields are rejected so a submission cannot forge an id or a share
/// balance.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    fields: Map<String, Value>,
}

impl Submission {
    /// Validate a raw request body into a submission.
    pub fn parse(body: Value) -> Result<Self, SubmissionError> {
        let Value::Object(fields) = body else {
            return Err(SubmissionError::NotAnObject);
        };

        for reserved in RESERVED_FIELDS {
            if fields.contains_key(*reserved) {
                return Err(SubmissionError::ReservedField((*reserved).to_string()));
            }
        }

        match fields.get("name") {
            Some(Value::String(name)) if !name.trim().is_empty() => {}
            _ => return Err(SubmissionError::MissingName),
        }

        Ok(Self { fields })
    }

    /// Consume the submission, yielding the validated fields.
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

/// The single persisted structure holding both member collections.
///
/// Ids come from a monotonic counter stored in the document, so an id
/// freed from the pending list by approval is never handed out again.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRegistry {
    #[serde(default)]
    pending_members: Vec<PendingMember>,

    #[serde(default)]
    approved_members: Vec<ApprovedMember>,

    #[serde(default)]
    next_id: u64,
}

impl MemberRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validated submission to the pending list, assigning
    /// the next id. Returns the created record.
    pub fn submit(&mut self, submission: Submission) -> PendingMember {
        let member = PendingMember {
            id: self.allocate_id(),
            fields: submission.into_fields(),
        };
        self.pending_members.push(member.clone());
        member
    }

    /// All pending members in submission order.
    pub fn pending(&self) -> &[PendingMember] {
        &self.pending_members
    }

    /// First pending member with the given id.
    pub fn pending_by_id(&self, id: u64) -> Option<&PendingMember> {
        self.pending_members.iter().find(|m| m.id == id)
    }

    /// Promote a pending member into the approved roster.
    ///
    /// Removes the first pending entry with the given id, appends an
    /// approved record with zeroed share-holding fields, and returns
    /// it. `None` if no pending entry matches; the transition is
    /// one-way.
    pub fn approve(&mut self, id: u64) -> Option<ApprovedMember> {
        let index = self.pending_members.iter().position(|m| m.id == id)?;
        let pending = self.pending_members.remove(index);

        let approved = ApprovedMember {
            id: pending.id,
            shares: 0,
            price_per_share: 0,
            fields: pending.fields,
        };
        self.approved_members.push(approved.clone());
        Some(approved)
    }

    /// All approved members in approval order.
    pub fn approved(&self) -> &[ApprovedMember] {
        &self.approved_members
    }

    /// First approved member with the given id.
    pub fn approved_by_id(&self, id: u64) -> Option<&ApprovedMember> {
        self.approved_members.iter().find(|m| m.id == id)
    }

    /// Number of pending members.
    pub fn pending_count(&self) -> usize {
        self.pending_members.len()
    }

    /// Number of approved members.
    pub fn approved_count(&self) -> usize {
        self.approved_members.len()
    }

    fn allocate_id(&mut self) -> u64 {
        if self.next_id == 0 {
            // Documents written before the counter existed: re-seed
            // from the highest id present in either collection.
            let max_pending = self.pending_members.iter().map(|m| m.id).max().unwrap_or(0);
            let max_approved = self.approved_members.iter().map(|m| m.id).max().unwrap_or(0);
            self.next_id = max_pending.max(max_approved) + 1;
        }

        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
