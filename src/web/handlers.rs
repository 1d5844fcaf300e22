use super::{
    AppState,
    binding::BindingResult,
    controllers,
    forms::{OwnerForm, PetForm, VisitForm},
    view::{Rendered, ViewModel},
};
use crate::errors::Result;
use axum::{
    Form,
    extract::{Path, Query, State},
};
use std::sync::Arc;

type AppStateRef = State<Arc<AppState>>;

pub async fn index() -> Rendered {
    Rendered::new(
        controllers::index(),
        ViewModel::default(),
        BindingResult::default(),
    )
}

pub async fn init_find_form(State(state): AppStateRef) -> Result<Rendered> {
    let mut model = ViewModel::default();
    let view = state.owners.init_find_form(&mut model)?;
    Ok(Rendered::new(view, model, BindingResult::default()))
}

pub async fn process_find_form(
    State(state): AppStateRef,
    Query(owner): Query<OwnerForm>,
) -> Result<Rendered> {
    let mut result = BindingResult::default();
    let mut model = ViewModel::default();
    let view = state
        .owners
        .process_find_form(&owner, &mut result, &mut model)
        .await?;
    Ok(Rendered::new(view, model, result))
}

pub async fn show_owner(
    State(state): AppStateRef,
    Path(owner_id): Path<i64>,
) -> Result<Rendered> {
    let mut model = ViewModel::default();
    let view = state.owners.show_owner(owner_id, &mut model).await?;
    Ok(Rendered::new(view, model, BindingResult::default()))
}

pub async fn init_owner_creation_form(State(state): AppStateRef) -> Result<Rendered> {
    let mut model = ViewModel::default();
    let view = state.owners.init_creation_form(&mut model)?;
    Ok(Rendered::new(view, model, BindingResult::default()))
}

pub async fn process_owner_creation_form(
    State(state): AppStateRef,
    Form(owner): Form<OwnerForm>,
) -> Result<Rendered> {
    let result = owner.validate();
    let mut model = ViewModel::default();
    model.add_attribute("owner", &owner)?;
    let view = state.owners.process_creation_form(owner, &result).await?;
    Ok(Rendered::new(view, model, result))
}

pub async fn init_update_owner_form(
    State(state): AppStateRef,
    Path(owner_id): Path<i64>,
) -> Result<Rendered> {
    let mut model = ViewModel::default();
    let view = state
        .owners
        .init_update_owner_form(owner_id, &mut model)
        .await?;
    Ok(Rendered::new(view, model, BindingResult::default()))
}

pub async fn process_update_owner_form(
    State(state): AppStateRef,
    Path(owner_id): Path<i64>,
    Form(owner): Form<OwnerForm>,
) -> Result<Rendered> {
    let result = owner.validate();
    let mut model = ViewModel::default();
    model.add_attribute("owner", &owner)?;
    let view = state
        .owners
        .process_update_owner_form(owner_id, owner, &result)
        .await?;
    Ok(Rendered::new(view, model, result))
}

pub async fn init_pet_creation_form(
    State(state): AppStateRef,
    Path(owner_id): Path<i64>,
) -> Result<Rendered> {
    let mut model = ViewModel::default();
    let view = state.pets.init_creation_form(owner_id, &mut model).await?;
    Ok(Rendered::new(view, model, BindingResult::default()))
}

pub async fn process_pet_creation_form(
    State(state): AppStateRef,
    Path(owner_id): Path<i64>,
    Form(pet): Form<PetForm>,
) -> Result<Rendered> {
    let mut result = pet.validate();
    let mut model = ViewModel::default();
    let view = state
        .pets
        .process_creation_form(owner_id, pet, &mut result, &mut model)
        .await?;
    Ok(Rendered::new(view, model, result))
}

pub async fn init_pet_update_form(
    State(state): AppStateRef,
    Path((owner_id, pet_id)): Path<(i64, i64)>,
) -> Result<Rendered> {
    let mut model = ViewModel::default();
    let view = state
        .pets
        .init_update_form(owner_id, pet_id, &mut model)
        .await?;
    Ok(Rendered::new(view, model, BindingResult::default()))
}

pub async fn process_pet_update_form(
    State(state): AppStateRef,
    Path((owner_id, pet_id)): Path<(i64, i64)>,
    Form(pet): Form<PetForm>,
) -> Result<Rendered> {
    let mut result = pet.validate();
    let mut model = ViewModel::default();
    let view = state
        .pets
        .process_update_form(owner_id, pet_id, pet, &mut result, &mut model)
        .await?;
    Ok(Rendered::new(view, model, result))
}

pub async fn init_new_visit_form(
    State(state): AppStateRef,
    Path((owner_id, pet_id)): Path<(i64, i64)>,
) -> Result<Rendered> {
    let mut model = ViewModel::default();
    let view = state
        .visits
        .init_new_visit_form(owner_id, pet_id, &mut model)
        .await?;
    Ok(Rendered::new(view, model, BindingResult::default()))
}

pub async fn process_new_visit_form(
    State(state): AppStateRef,
    Path((owner_id, pet_id)): Path<(i64, i64)>,
    Form(visit): Form<VisitForm>,
) -> Result<Rendered> {
    let result = visit.validate();
    let mut model = ViewModel::default();
    let view = state
        .visits
        .process_new_visit_form(owner_id, pet_id, visit, &result, &mut model)
        .await?;
    Ok(Rendered::new(view, model, result))
}

pub async fn list_vets(State(state): AppStateRef) -> Result<Rendered> {
    let mut model = ViewModel::default();
    let view = state.vets.list_vets(&mut model).await?;
    Ok(Rendered::new(view, model, BindingResult::default()))
}
