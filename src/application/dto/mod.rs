pub mod archive;
pub mod music;

pub use archive::{
    ArchiveMetaDto, ArchivePageDto, NavigationDto, PageInfoDto, PostDto, QueryStateDto,
    SortOptionDto,
};
pub use music::{ArtistListDto, ArtistSongsDto, ArtistSummaryDto, ArtistSummaryListDto, SongDto};
