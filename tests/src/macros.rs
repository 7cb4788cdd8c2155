/// Generate one `#[test]` per enabled backend for each listed async test
/// function. Each function receives a fresh `&mut` [`DbTest`](crate::DbTest).
#[macro_export]
macro_rules! tests {
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident
        ),+ $(,)?
    ) => {
        #[cfg(feature = "memory")]
        mod memory {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    let mut test = $crate::FilmesTest::new(
                        $crate::db::memory::SetupMemory::new()
                    );

                    test.run_test(|mut db_test| async move {
                        super::$f(&mut db_test).await;
                    });
                }
            )+
        }

        #[cfg(feature = "mongodb")]
        mod mongodb {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    let mut test = $crate::FilmesTest::new(
                        $crate::db::mongodb::SetupMongoDb::new()
                    );

                    test.run_test(|mut db_test| async move {
                        super::$f(&mut db_test).await;
                    });
                }
            )+
        }
    };
}
