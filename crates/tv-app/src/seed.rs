use tv_core::destination::{Destination, ImageRef};

/// Sample destinations shipped with the app, used to prime an empty
/// presentation list. Their pictures are bundled assets, not saved photos.
pub fn sample_destinations() -> Vec<Destination> {
    vec![
        Destination::new(
            "Gunung Bromo",
            "Gunung berapi aktif dengan pemandangan matahari terbit yang terkenal di Jawa Timur.",
            Some(ImageRef::Bundled { asset_id: 1 }),
        ),
        Destination::new(
            "Danau Toba",
            "Danau vulkanik terbesar di Asia Tenggara, terletak di Sumatera Utara.",
            Some(ImageRef::Bundled { asset_id: 2 }),
        ),
    ]
}
