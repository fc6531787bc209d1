use crate::{ConversionOptions, Context, Member, Model};
use modelgql_core::{
    schema::{
        gql::{Kind, ObjectType},
        source::ModelRef,
    },
    Error, Result,
};
use std::sync::Arc;

/// Configuration of a declarative [`Converter`].
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// The model to convert
    pub model: Option<ModelRef>,

    /// Kind used when none is passed to [`Converter::as_type`]
    pub kind: Option<Kind>,

    pub options: ConversionOptions,
}

/// Declares a GraphQL type by pointing at a model.
///
/// ```
/// use modelgql::{Config, Converter, Member, Model, Scalar};
///
/// #[derive(Model)]
/// struct User {
///     name: String,
/// }
///
/// struct UserGql;
///
/// impl Converter for UserGql {
///     fn config() -> Option<Config> {
///         Some(Config::new::<User>().id_field_name("id"))
///     }
///
///     fn members() -> Vec<(String, Member)> {
///         vec![("full_name".to_string(), Scalar::String.into())]
///     }
/// }
///
/// let ty = UserGql::as_type(None).unwrap();
/// let names: Vec<_> = ty.field_names().collect();
/// assert_eq!(names, ["name", "full_name", "id"]);
/// ```
pub trait Converter {
    /// The configuration block; `None` when it is missing.
    fn config() -> Option<Config>;

    /// Members declared alongside the configuration. Those that are GraphQL
    /// fields are added to the type; the others are ignored.
    fn members() -> Vec<(String, Member)> {
        vec![]
    }

    /// Builds the type in the process-wide context.
    fn as_type(kind: Option<Kind>) -> Result<Arc<ObjectType>> {
        Self::as_type_in(Context::global(), kind)
    }

    /// Builds the type. The kind defaults to the configured one, then to
    /// [`Kind::Object`].
    fn as_type_in(cx: &Context, kind: Option<Kind>) -> Result<Arc<ObjectType>> {
        let Some(config) = Self::config() else {
            return Err(Error::invalid_config_class("config is invalid"));
        };

        let Some(model) = config.model else {
            return Err(Error::invalid_config_class("config is missing \"model\""));
        };

        let mut options = config.options;
        options.extra_fields = Self::members()
            .into_iter()
            .filter(|(_, member)| member.is_field())
            .collect();

        let kind = kind.or(config.kind).unwrap_or_default();

        cx.convert_model(model, kind, &options)
    }
}

impl Config {
    /// Configuration converting `M`.
    pub fn new<M: Model>() -> Self {
        Self::for_model(M::model_ref())
    }

    pub fn for_model(model: ModelRef) -> Self {
        Self {
            model: Some(model),
            ..Self::default()
        }
    }

    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn options(mut self, options: ConversionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn id_field_name(mut self, name: impl Into<String>) -> Self {
        self.options.id_field_name = Some(name.into());
        self
    }

    pub fn exclude_field(mut self, name: impl Into<String>) -> Self {
        self.options.exclude_fields.insert(name.into());
        self
    }

    pub fn class_name(mut self, name: impl Into<String>) -> Self {
        self.options.class_name = Some(name.into());
        self
    }

    pub fn use_cache(mut self, use_cache: bool) -> Self {
        self.options.use_cache = use_cache;
        self
    }
}
