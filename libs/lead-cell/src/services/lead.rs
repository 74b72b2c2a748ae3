use chrono::Utc;
use tracing::debug;

use shared_models::error::AppError;
use shared_store::Repository;

use crate::models::{CreateLeadRequest, Lead, LeadStatus, LeadStore, UpdateLeadRequest};

pub struct LeadService {
    leads: LeadStore,
}

impl LeadService {
    pub fn new(leads: LeadStore) -> Self {
        Self { leads }
    }

    pub async fn list(&self) -> Vec<Lead> {
        self.leads.all().await
    }

    pub async fn get(&self, lead_id: i64) -> Result<Lead, AppError> {
        self.leads
            .get(lead_id)
            .await
            .ok_or_else(|| AppError::not_found("Lead", lead_id))
    }

    pub async fn create(&self, request: CreateLeadRequest) -> Result<Lead, AppError> {
        debug!("Creating lead {} from {}", request.name, request.source);

        let lead = Lead {
            id: 0,
            name: request.name,
            email: request.email,
            phone: request.phone,
            source: request.source,
            status: LeadStatus::New,
            notes: request.notes,
            created_at: Utc::now(),
            converted_at: None,
            converted_to_patient_id: None,
        };

        Ok(self.leads.add(lead).await)
    }

    pub async fn update(&self, lead_id: i64, request: UpdateLeadRequest) -> Result<Lead, AppError> {
        let mut lead = self.get(lead_id).await?;

        if let Some(name) = request.name {
            lead.name = name;
        }
        if let Some(email) = request.email {
            lead.email = email;
        }
        if let Some(phone) = request.phone {
            lead.phone = phone;
        }
        if let Some(notes) = request.notes {
            lead.notes = Some(notes);
        }

        self.leads.update(lead).await
    }

    pub async fn delete(&self, lead_id: i64) -> Result<(), AppError> {
        self.get(lead_id).await?;
        self.leads.delete(lead_id).await
    }

    pub async fn mark_contacted(
        &self,
        lead_id: i64,
        notes: Option<String>,
    ) -> Result<Lead, AppError> {
        let mut lead = self.get(lead_id).await?;

        lead.status = LeadStatus::Contacted;
        if notes.is_some() {
            lead.notes = notes;
        }

        self.leads.update(lead).await
    }

    pub async fn mark_lost(&self, lead_id: i64, reason: Option<String>) -> Result<Lead, AppError> {
        let mut lead = self.get(lead_id).await?;

        lead.status = LeadStatus::Lost;
        if reason.is_some() {
            lead.notes = reason;
        }

        self.leads.update(lead).await
    }

    /// Conversion is one-way; a lead converts to a patient at most once.
    pub async fn convert(&self, lead_id: i64, patient_id: i64) -> Result<Lead, AppError> {
        let mut lead = self.get(lead_id).await?;

        if lead.status == LeadStatus::Converted {
            return Err(AppError::BusinessRule(
                "Lead has already been converted".to_string(),
            ));
        }

        lead.status = LeadStatus::Converted;
        lead.converted_at = Some(Utc::now());
        lead.converted_to_patient_id = Some(patient_id);

        self.leads.update(lead).await
    }
}
