use serde::Serialize;
use tracing::warn;

use crate::error::CardError;
use crate::fragment::{
  ContentFragment,
  render_kind
};
use crate::kind::AssetKind;
use crate::model::Asset;
use crate::mount;

/// Detached card shell around one
/// asset's content fragment.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
)]
pub struct AssetCard {
  pub asset_id:           String,
  pub title:              String,
  /// Full description exposed by the
  /// info affordance.
  pub tooltip:            String,
  pub description:        String,
  pub description_dom_id: String,
  pub arrow_dom_id:       String,
  pub kind:               &'static str,
  pub body:               ContentFragment
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
)]
#[serde(
  tag = "slot",
  rename_all = "snake_case"
)]
pub enum CardSlot {
  Ready(AssetCard),
  Broken { title: String, reason: String }
}

impl CardSlot {
  pub fn card(&self) -> Option<&AssetCard> {
    match self {
      | Self::Ready(card) => Some(card),
      | Self::Broken { .. } => None
    }
  }
}

pub fn build_card(
  asset: &Asset
) -> Result<AssetCard, CardError> {
  if asset.id.trim().is_empty() {
    return Err(CardError::MissingId {
      title: asset.title.clone()
    });
  }

  let kind = AssetKind::classify(asset);
  let kind_key = kind.as_key();
  Ok(AssetCard {
    asset_id:           asset.id.clone(),
    title:              asset.title.clone(),
    tooltip:            asset
      .description
      .clone(),
    description:        asset
      .description
      .clone(),
    description_dom_id:
      mount::description_id(&asset.id),
    arrow_dom_id:       mount::arrow_id(
      &asset.id
    ),
    kind:               kind_key,
    body:               render_kind(
      kind, asset
    )
  })
}

/// Builds every card of a task. A card
/// that cannot be built is replaced by
/// a placeholder and the rest still
/// render.
#[tracing::instrument(
  level = "debug",
  skip_all,
  fields(assets = assets.len())
)]
pub fn build_cards(
  assets: &[Asset]
) -> Vec<CardSlot> {
  assets
    .iter()
    .map(|asset| {
      match build_card(asset) {
        | Ok(card) => CardSlot::Ready(card),
        | Err(err) => {
          warn!(error = %err, "skipping asset card");
          CardSlot::Broken {
            title:  asset.title.clone(),
            reason: err.to_string()
          }
        }
      }
    })
    .collect()
}
