fn main() {
    color_nft_minter::run();
}
