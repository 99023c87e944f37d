use cube3x3::cubie::CubieCube;
use cube3x3::facelet::FaceCube;
use cube3x3::printer::print_facelet;
use cube3x3::moves::Move::*;


fn main()
{
    let cc = CubieCube::default();
    let mvs = vec![R, U, R3, U3, M, S, E];
    let cc = cc.apply_moves(&mvs);
    // println!("{:#?}", cc);
    let fc = FaceCube::try_from(&cc).unwrap();
    println!("{}", fc);
    let _ = print_facelet(&fc);
}