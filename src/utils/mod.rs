//! Small helpers shared across modules

pub mod string;

/// Generates a builder for a plain config struct.
///
/// Every field is required: `build()` fails with a
/// [`CyclesError::ConfigurationError`](crate::error::CyclesError) naming the
/// first missing one. Optional values are declared as `Option<T>` fields and
/// still have to be set explicitly, which keeps command conversions honest.
#[macro_export]
macro_rules! impl_builder {
    ($builder:ident => $target:ident { $($field:ident : $ty:ty => $setter:ident),* $(,)? }) => {
        #[derive(Default)]
        pub struct $builder {
            $($field: Option<$ty>,)*
        }

        impl $builder {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                pub fn $setter(mut self, $field: $ty) -> Self {
                    self.$field = Some($field);
                    self
                }
            )*
        }

        impl $crate::common::ConfigBuilder for $builder {
            type Config = $target;

            fn build(self) -> Result<Self::Config, $crate::error::CyclesError> {
                Ok($target {
                    $(
                        $field: self.$field.ok_or_else(|| {
                            $crate::error::CyclesError::ConfigurationError {
                                message: concat!("Missing required field: ", stringify!($field))
                                    .to_string(),
                            }
                        })?,
                    )*
                })
            }
        }
    };
}
