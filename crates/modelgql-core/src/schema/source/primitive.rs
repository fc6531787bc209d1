/// Leaf types with no structure the converter looks into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Primitive {
    Str,
    Bool,
    Float,
    Int,
    Bytes,

    Date,
    DateTime,
    Time,
    TimeDelta,

    Decimal,

    Uuid,
    Uuid1,
    Uuid3,
    Uuid4,
    Uuid5,

    Ipv4Address,
    Ipv4Interface,
    Ipv4Network,
    Ipv6Address,
    Ipv6Interface,
    Ipv6Network,
    IpvAnyAddress,
    IpvAnyInterface,
    IpvAnyNetwork,

    /// A compiled regular expression
    Pattern,

    /// An arbitrary JSON document
    Json,

    EmailStr,
    NameEmail,
    SecretStr,
    SecretBytes,
    AnyUrl,
    HttpUrl,
    FilePath,
    DirectoryPath,
    Path,

    // Constrained variants
    ConStr,
    ConBytes,
    ConInt,
    ConFloat,
    ConDecimal,
    PositiveInt,
    NegativeInt,
    PositiveFloat,
    NegativeFloat,

    // Strict variants
    StrictStr,
    StrictBool,
    StrictInt,
    StrictFloat,
}
