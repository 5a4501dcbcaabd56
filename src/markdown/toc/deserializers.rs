use super::types::TocPosition;

// Accepts either a single position string or a sequence of them
pub fn deserialize_positions<'de, D>(deserializer: D) -> Result<Option<Vec<TocPosition>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct PositionOrVec;

    impl<'de> serde::de::Visitor<'de> for PositionOrVec {
        type Value = Option<Vec<TocPosition>>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("position string or sequence of position strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(vec![TocPosition::from(value)]))
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: serde::de::SeqAccess<'de>,
        {
            let mut values = Vec::new();
            while let Some(value) = seq.next_element::<String>()? {
                values.push(TocPosition::from(value));
            }
            Ok(Some(values))
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(PositionOrVec)
}
