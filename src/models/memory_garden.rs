use crate::models::common::{eq_update, load_saved, remove_saved, Loadable};
use crate::runtime::msg::{Action, ActionLoad, ActionSaved, Event, Internal, Msg};
use crate::runtime::{Effect, EffectFuture, Effects, Env, EnvError, EnvFutureExt, Update};
use crate::types::saved::SavedCollection;
use futures::FutureExt;
use serde::Serialize;

#[derive(Default, Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MemoryGarden {
    pub saved: Option<Loadable<SavedCollection, EnvError>>,
}

impl<E: Env + 'static> Update<E> for MemoryGarden {
    fn update(&mut self, msg: &Msg) -> Effects {
        match msg {
            Msg::Action(Action::Load(ActionLoad::MemoryGarden)) => {
                let saved_effects = eq_update(&mut self.saved, Some(Loadable::Loading));
                Effects::one(read_saved_collection::<E>())
                    .unchanged()
                    .join(saved_effects)
            }
            Msg::Action(Action::Unload) => eq_update(&mut self.saved, None),
            Msg::Action(Action::Saved(ActionSaved::Remove(id))) => {
                Effects::one(remove_saved_item::<E>(id)).unchanged()
            }
            Msg::Internal(Internal::SavedCollectionResult(result)) if self.saved.is_some() => {
                eq_update(&mut self.saved, Some(Loadable::from(result.to_owned())))
            }
            Msg::Internal(Internal::SavedRemoveResult(id, result)) => match result {
                Ok(true) => Effects::msgs(vec![
                    Msg::Event(Event::ItemRemoved { id: id.to_owned() }),
                    Msg::Internal(Internal::SavedCollectionChanged),
                ])
                .unchanged(),
                Ok(false) => Effects::none().unchanged(),
                Err(error) => Effects::msg(Msg::Event(Event::Error {
                    error: error.to_owned(),
                    source: Box::new(Event::ItemRemoved { id: id.to_owned() }),
                }))
                .unchanged(),
            },
            Msg::Internal(Internal::SavedCollectionChanged) if self.saved.is_some() => {
                Effects::one(read_saved_collection::<E>()).unchanged()
            }
            _ => Effects::none().unchanged(),
        }
    }
}

fn read_saved_collection<E: Env + 'static>() -> Effect {
    EffectFuture::Sequential(
        load_saved::<E>()
            .map(|result| Msg::Internal(Internal::SavedCollectionResult(result)))
            .boxed_env(),
    )
    .into()
}

fn remove_saved_item<E: Env + 'static>(id: &str) -> Effect {
    let id = id.to_owned();
    EffectFuture::Sequential(
        remove_saved::<E>(&id)
            .map(move |result| Msg::Internal(Internal::SavedRemoveResult(id, result)))
            .boxed_env(),
    )
    .into()
}
