//! Declarative impl generator for record types.

///
/// record_impl
///
/// Generates the [`DynRecord`](crate::traits::DynRecord) and
/// [`Record`](crate::traits::Record) impls for a struct from a listing of its
/// queryable fields, keeping the field table and the accessors in one place.
/// All three groups are written out, empty or not, so the mapping reads the
/// same for every record.
///
/// Shape requirements:
/// - scalar fields implement [`FieldValue`](crate::traits::FieldValue)
///   (use `Option<T>` for nullable fields);
/// - nested fields are `Option<Child>` where `Child: Record`;
/// - collection fields are `Option<Vec<Child>>` where `Child: Record`.
///
/// ```ignore
/// record_impl! {
///     Course {
///         model = &COURSE_MODEL,
///         scalars = { "Id" => id, "Title" => title },
///         nested = { "Instructor" => instructor },
///         collections = { "Modules" => modules },
///     }
/// }
/// ```
///
#[macro_export]
macro_rules! record_impl {
    (
        $ty:ty {
            model = $model:expr,
            scalars = { $( $s_name:literal => $s_field:ident ),* $(,)? },
            nested = { $( $n_name:literal => $n_field:ident ),* $(,)? },
            collections = { $( $c_name:literal => $c_field:ident ),* $(,)? } $(,)?
        }
    ) => {
        impl $crate::traits::DynRecord for $ty {
            fn model(&self) -> &'static $crate::model::RecordModel {
                <Self as $crate::traits::Record>::MODEL
            }

            fn field(&self, name: &str) -> Option<$crate::traits::FieldRead<'_>> {
                match name {
                    $(
                        $s_name => Some($crate::traits::FieldRead::Value(
                            $crate::traits::FieldValue::to_value(&self.$s_field),
                        )),
                    )*
                    $(
                        $n_name => Some($crate::traits::FieldRead::Nested(
                            self.$n_field
                                .as_ref()
                                .map(|nested| nested as &dyn $crate::traits::DynRecord),
                        )),
                    )*
                    $(
                        $c_name => Some($crate::traits::FieldRead::Collection),
                    )*
                    _ => None,
                }
            }
        }

        impl $crate::traits::Record for $ty {
            const MODEL: &'static $crate::model::RecordModel = $model;

            fn project(&self, tree: &$crate::query::projection::ProjectionTree) -> Self {
                let mut out = Self::default();
                for node in tree.nodes() {
                    match node.name() {
                        $(
                            $s_name => out.$s_field = self.$s_field.clone(),
                        )*
                        $(
                            $n_name => {
                                out.$n_field = self.$n_field.as_ref().map(|nested| {
                                    if node.is_leaf() {
                                        nested.clone()
                                    } else {
                                        $crate::traits::Record::project(nested, node.children())
                                    }
                                });
                            }
                        )*
                        $(
                            $c_name => {
                                out.$c_field = self.$c_field.as_ref().map(|items| {
                                    items
                                        .iter()
                                        .map(|item| {
                                            if node.is_leaf() {
                                                item.clone()
                                            } else {
                                                $crate::traits::Record::project(
                                                    item,
                                                    node.children(),
                                                )
                                            }
                                        })
                                        .collect()
                                });
                            }
                        )*
                        _ => {}
                    }
                }

                out
            }
        }
    };
}
