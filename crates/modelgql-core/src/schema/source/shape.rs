/// Container structure of a field, independent of its element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Shape {
    /// A single value
    #[default]
    Singleton,

    /// `Vec<T>`
    List,

    /// A fixed-arity tuple, `(A, B)`
    Tuple,

    /// A homogeneous tuple of any length
    TupleEllipsis,

    /// `VecDeque<T>` and other generic sequences
    Sequence,

    /// `HashSet<T>`, `BTreeSet<T>`
    Set,

    FrozenSet,

    /// Any iterable. Only present when the source framework declares it.
    Iterable,

    /// `HashMap<K, V>`, `BTreeMap<K, V>`
    Mapping,

    Dict,

    DefaultDict,

    Counter,

    /// A user-defined generic container.
    Generic,
}
