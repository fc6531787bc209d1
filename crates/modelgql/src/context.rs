use crate::{convert::Convert, ConversionOptions, IntoModelRef, Model, ScalarTable};
use modelgql_core::{
    schema::{
        gql::{self, EnumType, Kind, ObjectRef, ObjectType},
        source::{self, ModelId},
    },
    Capability, Result,
};
use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

type TypeKey = (ModelId, Kind);

/// Holds the conversion cache and the scalar table.
///
/// The state is locked for the whole of a top-level conversion, so two
/// threads converting the same model always observe a single definition.
/// A failed conversion leaves the cache as it was before the call.
#[derive(Debug)]
pub struct Context {
    state: Mutex<State>,
}

#[derive(Debug)]
pub(crate) struct State {
    capability: Capability,

    /// Built on first use
    scalars: Option<Arc<ScalarTable>>,

    types: HashMap<TypeKey, Arc<ObjectType>>,

    enums: HashMap<ModelId, Arc<EnumType>>,

    /// Models whose conversion has started but not finished, with the
    /// reference nested fields point to in the meantime.
    in_flight: HashMap<TypeKey, ObjectRef>,

    /// Cache writes of the current top-level conversion
    journal: Vec<Undo>,
}

#[derive(Debug)]
enum Undo {
    Type(TypeKey, Option<Arc<ObjectType>>),
    Enum(ModelId, Option<Arc<EnumType>>),
}

static GLOBAL: Lazy<Context> = Lazy::new(Context::new);

impl Context {
    pub fn new() -> Self {
        Self::with_capability(Capability::default())
    }

    pub fn with_capability(capability: Capability) -> Self {
        Self {
            state: Mutex::new(State {
                capability,
                scalars: None,
                types: HashMap::new(),
                enums: HashMap::new(),
                in_flight: HashMap::new(),
                journal: vec![],
            }),
        }
    }

    /// The process-wide context used by [`crate::to_graphql`].
    pub fn global() -> &'static Context {
        &GLOBAL
    }

    pub fn capability(&self) -> Capability {
        self.lock().capability
    }

    /// Replaces the capability. The scalar table is rebuilt on next use and
    /// previously converted types are dropped.
    pub fn set_capability(&self, capability: Capability) {
        let mut state = self.lock();
        state.capability = capability;
        state.scalars = None;
        state.types.clear();
        state.enums.clear();
    }

    pub fn scalar_table(&self) -> Arc<ScalarTable> {
        self.lock().scalar_table()
    }

    /// Forces the scalar table to be rebuilt on next use.
    pub fn clear_scalar_table(&self) {
        self.lock().scalars = None;
    }

    /// Forgets every converted type and enum.
    pub fn clear_cache(&self) {
        let mut state = self.lock();
        state.types.clear();
        state.enums.clear();
        tracing::debug!("cleared conversion cache");
    }

    /// Returns the cached conversion of `model`, if any.
    pub fn cached(&self, model: impl IntoModelRef, kind: Kind) -> Option<Arc<ObjectType>> {
        let model = model.into_model_ref();
        self.lock().cached_type(&(model.id(), kind))
    }

    /// Converts `M` with default options.
    pub fn convert<M: Model>(&self, kind: Kind) -> Result<Arc<ObjectType>> {
        self.convert_model(M::model_ref(), kind, &ConversionOptions::default())
    }

    pub fn convert_model(
        &self,
        model: impl IntoModelRef,
        kind: Kind,
        options: &ConversionOptions,
    ) -> Result<Arc<ObjectType>> {
        let model = model.into_model_ref();
        self.transaction(|state| Convert::new(state, kind, options).model(&model))
    }

    /// Converts a single field as if it belonged to a model of `kind`.
    pub fn convert_field(&self, field: &source::Field, kind: Kind) -> Result<gql::Field> {
        let options = ConversionOptions::default();
        self.transaction(|state| Convert::new(state, kind, &options).field(field))
    }

    fn transaction<T>(&self, f: impl FnOnce(&mut State) -> Result<T>) -> Result<T> {
        let mut state = self.lock();
        state.begin();

        let result = f(&mut state);

        match &result {
            Ok(_) => state.journal.clear(),
            Err(err) => {
                tracing::debug!(error = %err, "conversion failed, discarding its cache entries");
                state.rollback();
            }
        }

        result
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // The state stays consistent across a panic: `begin` resets
        // whatever a panicking conversion left behind.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    pub(crate) fn capability(&self) -> Capability {
        self.capability
    }

    pub(crate) fn scalar_table(&mut self) -> Arc<ScalarTable> {
        let capability = self.capability;
        self.scalars
            .get_or_insert_with(|| Arc::new(ScalarTable::new(&capability)))
            .clone()
    }

    pub(crate) fn cached_type(&self, key: &TypeKey) -> Option<Arc<ObjectType>> {
        self.types.get(key).cloned()
    }

    pub(crate) fn insert_type(&mut self, key: TypeKey, ty: Arc<ObjectType>) {
        let prev = self.types.insert(key, ty);
        self.journal.push(Undo::Type(key, prev));
    }

    pub(crate) fn cached_enum(&self, id: ModelId) -> Option<Arc<EnumType>> {
        self.enums.get(&id).cloned()
    }

    pub(crate) fn insert_enum(&mut self, id: ModelId, ty: Arc<EnumType>) {
        let prev = self.enums.insert(id, ty);
        self.journal.push(Undo::Enum(id, prev));
    }

    pub(crate) fn in_flight(&self, key: &TypeKey) -> Option<ObjectRef> {
        self.in_flight.get(key).cloned()
    }

    pub(crate) fn start(&mut self, key: TypeKey, slot: ObjectRef) {
        self.in_flight.insert(key, slot);
    }

    pub(crate) fn finish(&mut self, key: &TypeKey) {
        self.in_flight.remove(key);
    }

    fn begin(&mut self) {
        self.in_flight.clear();
        self.journal.clear();
    }

    fn rollback(&mut self) {
        while let Some(undo) = self.journal.pop() {
            match undo {
                Undo::Type(key, Some(prev)) => {
                    self.types.insert(key, prev);
                }
                Undo::Type(key, None) => {
                    self.types.remove(&key);
                }
                Undo::Enum(id, Some(prev)) => {
                    self.enums.insert(id, prev);
                }
                Undo::Enum(id, None) => {
                    self.enums.remove(&id);
                }
            }
        }

        self.in_flight.clear();
    }
}
