use crate::models::common::{eq_update, is_saved, toggle_saved, Loadable};
use crate::runtime::msg::{Action, ActionLoad, ActionSaved, Event, Internal, Msg};
use crate::runtime::{Effect, EffectFuture, Effects, Env, EnvError, EnvFutureExt, Update};
use futures::FutureExt;
use serde::Serialize;

/// Saved state of the item currently shown in the experience viewer.
#[derive(Default, Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SavedItem {
    pub selected: Option<String>,
    pub saved: Option<Loadable<bool, EnvError>>,
}

impl<E: Env + 'static> Update<E> for SavedItem {
    fn update(&mut self, msg: &Msg) -> Effects {
        match msg {
            Msg::Action(Action::Load(ActionLoad::SavedItem(id))) => {
                let selected_effects = eq_update(&mut self.selected, Some(id.to_owned()));
                let saved_effects = eq_update(&mut self.saved, Some(Loadable::Loading));
                Effects::one(read_saved_item::<E>(id))
                    .unchanged()
                    .join(selected_effects)
                    .join(saved_effects)
            }
            Msg::Action(Action::Unload) => {
                let selected_effects = eq_update(&mut self.selected, None);
                let saved_effects = eq_update(&mut self.saved, None);
                selected_effects.join(saved_effects)
            }
            Msg::Action(Action::Saved(ActionSaved::Toggle)) => match &self.selected {
                Some(id) => Effects::one(toggle_saved_item::<E>(id)).unchanged(),
                _ => Effects::none().unchanged(),
            },
            Msg::Internal(Internal::SavedItemResult(id, result))
                if self.selected.as_ref() == Some(id) =>
            {
                eq_update(&mut self.saved, Some(Loadable::from(result.to_owned())))
            }
            Msg::Internal(Internal::SavedToggleResult(id, result)) => {
                let saved_effects = match result {
                    Ok(is_saved) if self.selected.as_ref() == Some(id) => {
                        eq_update(&mut self.saved, Some(Loadable::Ready(*is_saved)))
                    }
                    _ => Effects::none().unchanged(),
                };
                let notification_effects = match result {
                    Ok(true) => Effects::msgs(vec![
                        Msg::Event(Event::ItemSaved { id: id.to_owned() }),
                        Msg::Internal(Internal::SavedCollectionChanged),
                    ])
                    .unchanged(),
                    Ok(false) => Effects::msgs(vec![
                        Msg::Event(Event::ItemRemoved { id: id.to_owned() }),
                        Msg::Internal(Internal::SavedCollectionChanged),
                    ])
                    .unchanged(),
                    Err(error) => Effects::msg(Msg::Event(Event::Error {
                        error: error.to_owned(),
                        source: Box::new(Event::ItemSaved { id: id.to_owned() }),
                    }))
                    .unchanged(),
                };
                saved_effects.join(notification_effects)
            }
            Msg::Internal(Internal::SavedCollectionChanged) => match &self.selected {
                Some(id) => Effects::one(read_saved_item::<E>(id)).unchanged(),
                _ => Effects::none().unchanged(),
            },
            _ => Effects::none().unchanged(),
        }
    }
}

fn read_saved_item<E: Env + 'static>(id: &str) -> Effect {
    let id = id.to_owned();
    EffectFuture::Sequential(
        is_saved::<E>(&id)
            .map(move |result| Msg::Internal(Internal::SavedItemResult(id, result)))
            .boxed_env(),
    )
    .into()
}

fn toggle_saved_item<E: Env + 'static>(id: &str) -> Effect {
    let id = id.to_owned();
    EffectFuture::Sequential(
        toggle_saved::<E>(&id)
            .map(move |result| Msg::Internal(Internal::SavedToggleResult(id, result)))
            .boxed_env(),
    )
    .into()
}
